use crate::{
    api::{request_failed, ApiClient, Transport},
    model::project_payment::NewProjectPayment,
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// Books a credit or debit against a project's ledger, attributed to the session user
    pub async fn create_project_payment(&self, payment: &NewProjectPayment) -> Result<(), Error> {
        self.post_attributed("/api/payment/add-payment-for-project", payment)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create project payment. Please try again."))
    }
}
