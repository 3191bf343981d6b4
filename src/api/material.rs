use crate::{
    api::{request_failed, ApiClient, Transport},
    model::material::NewMaterialPayment,
    Error,
};

impl<T: Transport> ApiClient<T> {
    pub async fn create_material_payment(&self, payment: &NewMaterialPayment) -> Result<(), Error> {
        self.post_json("/api/material/add-material-payment", payment)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create material payment. Please try again."))
    }
}
