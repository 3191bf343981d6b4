use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{
        api::ContractsEnvelope,
        contract::ContractDto,
        summary::{ContractPaymentSummary, ProjectPaymentSummary},
    },
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// Contracts signed under one project
    pub async fn contracts_by_project(&self, project_id: &str) -> Result<Vec<ContractDto>, Error> {
        self.get_json::<ContractsEnvelope<ContractDto>>(&format!("/api/payment/contracts/by-project/{project_id}"))
            .await
            .map(|envelope| envelope.contracts)
            .map_err(request_failed("Failed to load contracts"))
    }

    /// Contract amount, payments made against it and the remaining balance
    pub async fn contract_summary(&self, contract_id: &str) -> Result<ContractPaymentSummary, Error> {
        self.get_json(&format!("/api/payment/contract-summary/{contract_id}"))
            .await
            .map_err(request_failed("Failed to load contract payment summary"))
    }

    /// Both ledgers of a project with their totals
    pub async fn project_summary(&self, project_id: &str) -> Result<ProjectPaymentSummary, Error> {
        self.get_json(&format!("/api/payment/full-summary/{project_id}"))
            .await
            .map_err(request_failed("Failed to load project payment summary"))
    }
}
