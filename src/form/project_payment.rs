use chrono::NaiveDate;

use crate::{
    form::{
        check_receipt_url, check_transaction_id, optional_text, parse_choice, require_choice,
        require_past_date, require_positive, require_text, Draft, FieldErrors, DATE_FORMAT,
    },
    model::{
        enums::{Choice, LedgerType, PaymentMethod, PaymentStatus},
        project_payment::NewProjectPayment,
    },
};

/// Draft of a project ledger entry (client receipt or project expense)
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectPaymentDraft {
    pub project: String,
    pub kind: String,
    pub payment_amount: String,
    pub payment_date: String,
    pub payment_status: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub receipt_photo: String,
    pub notes: String,
}

impl Default for ProjectPaymentDraft {
    fn default() -> Self {
        Self {
            project: String::new(),
            kind: LedgerType::default().value().to_string(),
            payment_amount: String::new(),
            payment_date: String::new(),
            payment_status: PaymentStatus::default().value().to_string(),
            payment_method: String::new(),
            transaction_id: String::new(),
            receipt_photo: String::new(),
            notes: String::new(),
        }
    }
}

impl ProjectPaymentDraft {
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            payment_date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

impl Draft for ProjectPaymentDraft {
    type Valid = NewProjectPayment;

    fn validate(&self, today: NaiveDate) -> Result<NewProjectPayment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let project = require_text(
            &mut errors,
            "project",
            &self.project,
            "Project selection is required",
        );
        let kind = require_choice::<LedgerType>(&mut errors, "type", &self.kind, "Payment type is required");
        let amount = require_positive(
            &mut errors,
            "paymentAmount",
            &self.payment_amount,
            "Payment amount is required",
            "Please enter a valid amount greater than 0",
        );
        let payment_method = require_choice::<PaymentMethod>(
            &mut errors,
            "paymentMethod",
            &self.payment_method,
            "Payment method is required",
        );
        let payment_date = require_past_date(&mut errors, "paymentDate", &self.payment_date, today);
        let transaction_id = check_transaction_id(&mut errors, payment_method, &self.transaction_id);
        let receipt_photo = check_receipt_url(&mut errors, &self.receipt_photo);
        let payment_status = parse_choice::<PaymentStatus>(&self.payment_status).unwrap_or_default();

        errors.into_result()?;
        let (Some(project), Some(kind), Some(amount), Some(payment_method), Some(payment_date)) =
            (project, kind, amount, payment_method, payment_date)
        else {
            return Err(FieldErrors::new());
        };

        Ok(NewProjectPayment {
            project,
            kind,
            payment_amount: amount,
            amount,
            payment_date,
            payment_status,
            payment_method,
            transaction_id,
            receipt_photo,
            notes: optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn defaults_to_credit_paid_today() {
        let draft = ProjectPaymentDraft::dated(today());
        assert_eq!(draft.kind, "credit");
        assert_eq!(draft.payment_status, "paid");
        assert_eq!(draft.payment_date, "2024-06-01");
    }

    #[test]
    fn errors_use_project_payment_field_names() {
        let draft = ProjectPaymentDraft {
            kind: String::new(),
            payment_method: "upi".to_string(),
            payment_date: "2030-01-01".to_string(),
            ..ProjectPaymentDraft::default()
        };
        let errors = draft.errors(today());
        assert_eq!(errors.get("type"), Some("Payment type is required"));
        assert_eq!(errors.get("paymentAmount"), Some("Payment amount is required"));
        assert_eq!(errors.get("paymentDate"), Some("Payment date cannot be in the future"));
        assert!(errors.contains("transactionId"));
        assert!(errors.contains("project"));
    }

    #[test]
    fn amount_is_sent_under_both_names() {
        let draft = ProjectPaymentDraft {
            project: "pr1".to_string(),
            kind: "debit".to_string(),
            payment_amount: "20000".to_string(),
            payment_method: "check".to_string(),
            transaction_id: "CHQ-0042".to_string(),
            ..ProjectPaymentDraft::dated(today())
        };
        let body = serde_json::to_value(draft.validate(today()).unwrap()).unwrap();
        assert_eq!(body["amount"], 20000.0);
        assert_eq!(body["paymentAmount"], 20000.0);
        assert_eq!(body["type"], "debit");
        assert_eq!(body["paymentStatus"], "paid");
        assert_eq!(body["transactionId"], "CHQ-0042");
    }
}
