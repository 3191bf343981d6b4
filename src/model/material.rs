use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A material purchase booked against a project
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPaymentDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub material_detail: String,
    #[serde(default)]
    pub material_provider: String,
    #[serde(rename = "MaterialQuantity", default)]
    pub quantity: Option<f64>,
    #[serde(rename = "MaterialRate", default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /api/material/add-material-payment`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewMaterialPayment {
    pub project: String,
    pub material_detail: String,
    pub material_provider: String,
    #[serde(rename = "MaterialQuantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(rename = "MaterialRate", skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub total_amount: f64,
    pub date: NaiveDate,
}
