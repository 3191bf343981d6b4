use chrono::NaiveDate;
use serde::Serialize;

use crate::model::enums::{PaymentMethod, PaymentStatus};

/// Body of `POST /api/payment/create-payment`
///
/// `created_by` is filled from the session when the request is sent, never from the form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewPayment {
    pub project: String,
    pub contractor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    pub date: NaiveDate,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_description: Option<String>,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// [`NewPayment`] stamped with the id of the signed-in user
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributedPayment<'a, T> {
    #[serde(flatten)]
    pub payment: &'a T,
    pub created_by: &'a str,
}
