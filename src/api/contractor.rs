use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{
        api::DataEnvelope,
        contractor::{ContractorDto, NewContractor},
    },
    Error,
};

impl<T: Transport> ApiClient<T> {
    pub async fn list_contractors(&self) -> Result<Vec<ContractorDto>, Error> {
        self.get_json::<DataEnvelope<ContractorDto>>("/api/contractor/get-all-contractors")
            .await
            .map(|envelope| envelope.data)
            .map_err(request_failed("Failed to load contractors"))
    }

    pub async fn create_contractor(&self, contractor: &NewContractor) -> Result<(), Error> {
        self.post_json("/api/contractor/create-contractor", contractor)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create contractor. Please try again."))
    }
}
