use chrono::NaiveDate;
use serde::Serialize;

use crate::model::enums::{LedgerType, PaymentMethod, PaymentStatus};

/// Body of `POST /api/payment/add-payment-for-project`
///
/// The backend reads the amount from `amount` while older records use `paymentAmount`, so both
/// carry the same number.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewProjectPayment {
    pub project: String,
    #[serde(rename = "type")]
    pub kind: LedgerType,
    pub payment_amount: f64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
