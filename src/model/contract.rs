use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project as embedded in a contract
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractProjectRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_code: String,
}

/// Contractor as embedded in a contract or payment
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
}

/// A project contract with its project and contractor populated
///
/// Returned by the contract list route (used by the payment form's contract picker) and by the
/// contracts-by-project route (used by the contract payments browser).
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub project: ContractProjectRefDto,
    #[serde(default)]
    pub contractor: CompanyRefDto,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_terminated: bool,
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Only the count is displayed, so the entries stay opaque
    #[serde(default)]
    pub payments: Vec<serde_json::Value>,
}

impl ContractDto {
    /// Label used by the payment form's contract select
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.contract_type, crate::format::format_pkr(self.total_amount))
    }
}

/// Body of `POST /api/project-contract/create-project-contract`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewContract {
    pub project: String,
    pub contractor: String,
    pub contract_type: String,
    pub total_amount: f64,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Description")]
    pub description: String,
}
