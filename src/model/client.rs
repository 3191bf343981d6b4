use serde::{Deserialize, Serialize};

use crate::model::{
    api::{Reference, UserRefDto},
    enums::PaymentTerms,
};

/// A client (customer) record; the user reference is populated by the list route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Reference<UserRefDto>,
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub bank_details: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub is_active: bool,
}

impl ClientDto {
    /// Name shown in selects, falling back to the raw id when the user was not populated
    pub fn display_name(&self) -> String {
        match &self.user {
            Reference::Populated(user) => format!("{} ({})", user.user_name, user.email),
            Reference::Id(id) => id.clone(),
        }
    }
}

/// Body of `POST /api/client/create-client`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewClient {
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<PaymentTerms>,
    pub bank_details: String,
    pub address: String,
    pub phone_number: String,
}
