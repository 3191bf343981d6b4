//! Closed value sets shared by the forms, the wire format and the select inputs.
//!
//! Each enum serializes to the exact string the backend stores and carries a display label used
//! by the select inputs. The [`Choice`] trait gives every enum the same `value`/`label`/`all`
//! surface so the UI can render any of them generically.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};

/// Common surface of the closed value sets rendered as select options.
pub trait Choice: Copy + Sized + 'static {
    /// Wire value sent to and received from the backend
    fn value(self) -> &'static str;
    /// Human readable label shown in selects
    fn label(self) -> &'static str;
    /// Every variant in display order
    fn all() -> Vec<Self>;
}

impl<T> Choice for T
where
    T: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator + 'static,
{
    fn value(self) -> &'static str {
        self.into()
    }

    fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.into())
    }

    fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage, Default,
)]
pub enum UserRole {
    Admin,
    Contractor,
    #[default]
    User,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
pub enum ContractorType {
    #[serde(rename = "Grey Structure")]
    #[strum(serialize = "Grey Structure")]
    GreyStructure,
    Finishing,
    Interior,
    Exterior,
    Landscaping,
    Painting,
    Tiling,
    General,
    Electrical,
    Plumbing,
    Masonry,
    Carpentry,
    Roofing,
    Other,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
pub enum PaymentTerms {
    Daily,
    Weekly,
    #[serde(rename = "Bi-Weekly")]
    #[strum(serialize = "Bi-Weekly")]
    BiWeekly,
    Milestone,
    Monthly,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectCategory {
    #[strum(message = "Residential")]
    Residential,
    #[strum(message = "Commercial")]
    Commercial,
    #[strum(message = "Industrial")]
    Industrial,
    #[strum(message = "Infrastructure")]
    Infrastructure,
    #[strum(message = "Other")]
    Other,
}

/// How a project is priced; decides which cost roll-up applies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProjectType {
    #[strum(message = "Labour Rate Only")]
    LabourRate,
    #[strum(message = "With Material")]
    WithMaterial,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    #[strum(message = "Planning")]
    Planning,
    #[strum(message = "Pending")]
    Pending,
    #[strum(message = "Ongoing")]
    Ongoing,
    #[strum(message = "Completed")]
    Completed,
    #[strum(message = "On Hold")]
    OnHold,
    #[strum(message = "Cancelled")]
    Cancelled,
}

/// Suggested contract types; the stored contract type itself is free text.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContractType {
    #[strum(message = "Fixed Price Contract")]
    FixedPrice,
    #[strum(message = "Time & Material")]
    TimeMaterial,
    #[strum(message = "Cost Plus Contract")]
    CostPlus,
    #[strum(message = "Unit Price Contract")]
    UnitPrice,
    #[strum(message = "Lump Sum Contract")]
    LumpSum,
    #[strum(message = "Milestone Based")]
    Milestone,
    #[strum(message = "Other")]
    Other,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[strum(message = "Cash")]
    Cash,
    #[strum(message = "Check")]
    Check,
    #[strum(message = "Bank Transfer")]
    BankTransfer,
    #[strum(message = "UPI")]
    Upi,
    #[strum(message = "Digital Wallet")]
    DigitalWallet,
}

impl PaymentMethod {
    /// Every method except cash leaves a transaction reference behind.
    pub fn requires_transaction_id(self) -> bool {
        self != Self::Cash
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[strum(message = "Pending")]
    Pending,
    #[default]
    #[strum(message = "Paid")]
    Paid,
    #[strum(message = "Verified")]
    Verified,
    #[strum(message = "Disputed")]
    Disputed,
    #[strum(message = "Rejected")]
    Rejected,
}

/// Direction of a project ledger entry: money in (credit) or money out (debit).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter, EnumMessage, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LedgerType {
    #[default]
    #[strum(message = "Credit")]
    Credit,
    #[strum(message = "Debit")]
    Debit,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn wire_values_match_backend_strings() {
        assert_eq!(PaymentMethod::BankTransfer.value(), "bank_transfer");
        assert_eq!(ProjectStatus::OnHold.value(), "on_hold");
        assert_eq!(ProjectType::LabourRate.value(), "labourRate");
        assert_eq!(ProjectType::WithMaterial.value(), "withMaterial");
        assert_eq!(ContractorType::GreyStructure.value(), "Grey Structure");
        assert_eq!(PaymentTerms::BiWeekly.value(), "Bi-Weekly");
        assert_eq!(UserRole::Admin.value(), "Admin");
    }

    #[test]
    fn labels_fall_back_to_value() {
        assert_eq!(PaymentMethod::Upi.label(), "UPI");
        assert_eq!(ContractType::TimeMaterial.label(), "Time & Material");
        assert_eq!(ContractorType::Roofing.label(), "Roofing");
    }

    #[test]
    fn parses_from_wire_value() {
        assert_eq!(
            PaymentMethod::from_str("digital_wallet").unwrap(),
            PaymentMethod::DigitalWallet
        );
        assert!(PaymentMethod::from_str("Digital Wallet").is_err());
        assert_eq!(
            ContractorType::from_str("Grey Structure").unwrap(),
            ContractorType::GreyStructure
        );
    }

    #[test]
    fn serde_agrees_with_strum() {
        for method in PaymentMethod::all() {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.value()));
        }
        for status in ProjectStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.value()));
        }
    }

    #[test]
    fn only_cash_skips_transaction_id() {
        let needing: Vec<_> = PaymentMethod::all()
            .into_iter()
            .filter(|m| m.requires_transaction_id())
            .collect();
        assert_eq!(needing.len(), 4);
        assert!(!PaymentMethod::Cash.requires_transaction_id());
    }
}
