use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{
        api::DataEnvelope,
        client::{ClientDto, NewClient},
    },
    Error,
};

impl<T: Transport> ApiClient<T> {
    pub async fn list_clients(&self) -> Result<Vec<ClientDto>, Error> {
        self.get_json::<DataEnvelope<ClientDto>>("/api/client/get-all-clients")
            .await
            .map(|envelope| envelope.data)
            .map_err(request_failed("Failed to load clients"))
    }

    pub async fn create_client(&self, client: &NewClient) -> Result<(), Error> {
        self.post_json("/api/client/create-client", client)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create client. Please try again."))
    }
}
