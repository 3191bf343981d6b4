use serde::{Deserialize, Serialize};

use crate::model::{
    api::{Reference, UserRefDto},
    enums::{ContractorType, PaymentTerms},
};

/// A contractor (vendor) record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Option<Reference<UserRefDto>>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contractor_type: String,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub bank_details: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
}

impl ContractorDto {
    /// Owner's user name when the backend populated it
    pub fn owner_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(Reference::populated)
            .map(|u| u.user_name.as_str())
    }
}

/// Body of `POST /api/contractor/create-contractor`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewContractor {
    pub user: String,
    pub company_name: String,
    pub contractor_type: ContractorType,
    pub payment_terms: PaymentTerms,
    pub bank_details: String,
    pub address: String,
    pub phone_number: String,
}
