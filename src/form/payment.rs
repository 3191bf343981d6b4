use chrono::NaiveDate;

use crate::{
    form::{
        check_receipt_url, check_transaction_id, optional_text, parse_choice, require_choice,
        require_past_date, require_positive, require_text, Draft, FieldErrors, DATE_FORMAT,
    },
    model::{
        enums::{Choice, PaymentMethod, PaymentStatus},
        payment::NewPayment,
    },
};

/// Draft of a payment made to a contractor
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentDraft {
    pub project: String,
    pub contractor: String,
    /// Optional; only selectable once project and contractor are chosen
    pub contract: String,
    pub date: String,
    pub amount: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub work_description: String,
    pub status: String,
    pub receipt_photo: String,
    pub notes: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            project: String::new(),
            contractor: String::new(),
            contract: String::new(),
            date: String::new(),
            amount: String::new(),
            payment_method: String::new(),
            transaction_id: String::new(),
            work_description: String::new(),
            status: PaymentStatus::default().value().to_string(),
            receipt_photo: String::new(),
            notes: String::new(),
        }
    }
}

impl PaymentDraft {
    /// A blank draft dated `today`
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }
}

impl Draft for PaymentDraft {
    type Valid = NewPayment;

    fn validate(&self, today: NaiveDate) -> Result<NewPayment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let project = require_text(
            &mut errors,
            "project",
            &self.project,
            "Project selection is required",
        );
        let contractor = require_text(
            &mut errors,
            "contractor",
            &self.contractor,
            "Contractor selection is required",
        );
        let amount = require_positive(
            &mut errors,
            "amount",
            &self.amount,
            "Payment amount is required",
            "Please enter a valid amount greater than 0",
        );
        let payment_method = require_choice::<PaymentMethod>(
            &mut errors,
            "paymentMethod",
            &self.payment_method,
            "Payment method is required",
        );
        let date = require_past_date(&mut errors, "date", &self.date, today);
        let transaction_id = check_transaction_id(&mut errors, payment_method, &self.transaction_id);
        let receipt_photo = check_receipt_url(&mut errors, &self.receipt_photo);
        let status = parse_choice::<PaymentStatus>(&self.status).unwrap_or_default();

        errors.into_result()?;
        let (Some(project), Some(contractor), Some(amount), Some(payment_method), Some(date)) =
            (project, contractor, amount, payment_method, date)
        else {
            return Err(FieldErrors::new());
        };

        Ok(NewPayment {
            project,
            contractor,
            contract: optional_text(&self.contract),
            date,
            amount,
            payment_method,
            transaction_id,
            work_description: optional_text(&self.work_description),
            status,
            receipt_photo,
            notes: optional_text(&self.notes),
        })
    }
}
