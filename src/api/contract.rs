use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{
        api::DataEnvelope,
        contract::{ContractDto, NewContract},
    },
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// Every project contract, with project and contractor populated
    pub async fn list_contracts(&self) -> Result<Vec<ContractDto>, Error> {
        self.get_json::<DataEnvelope<ContractDto>>("/api/project-contract/get-all-project-contracts")
            .await
            .map(|envelope| envelope.data)
            .map_err(request_failed("Failed to load project contracts"))
    }

    pub async fn create_contract(&self, contract: &NewContract) -> Result<(), Error> {
        self.post_json("/api/project-contract/create-project-contract", contract)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create project contract. Please try again."))
    }
}
