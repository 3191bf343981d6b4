use chrono::NaiveDate;

use crate::{
    form::{is_valid_phone, parse_choice, require_text, Draft, FieldErrors},
    model::{client::NewClient, enums::PaymentTerms},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientDraft {
    pub user: String,
    pub payment_terms: String,
    pub bank_details: String,
    pub address: String,
    pub phone_number: String,
}

impl Draft for ClientDraft {
    type Valid = NewClient;

    fn validate(&self, _today: NaiveDate) -> Result<NewClient, FieldErrors> {
        let mut errors = FieldErrors::new();

        let user = require_text(&mut errors, "user", &self.user, "User selection is required");

        if !self.phone_number.is_empty() && !is_valid_phone(&self.phone_number) {
            errors.set("phoneNumber", "Please enter a valid phone number");
        }

        let payment_terms = parse_choice::<PaymentTerms>(&self.payment_terms);
        if payment_terms.is_none() && !self.payment_terms.trim().is_empty() {
            errors.set("paymentTerms", "Please select valid payment terms");
        }

        errors.into_result()?;
        let Some(user) = user else {
            return Err(FieldErrors::new());
        };

        Ok(NewClient {
            user,
            payment_terms,
            bank_details: self.bank_details.trim().to_string(),
            address: self.address.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
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
    fn user_is_the_only_required_field() {
        let errors = ClientDraft::default().errors(today());
        assert_eq!(errors.get("user"), Some("User selection is required"));
        assert_eq!(errors.len(), 1);

        let draft = ClientDraft {
            user: "u1".to_string(),
            ..Default::default()
        };
        let client = draft.validate(today()).unwrap();
        assert_eq!(client.user, "u1");
        assert_eq!(client.payment_terms, None);
    }

    #[test]
    fn phone_is_checked_only_when_present() {
        let draft = ClientDraft {
            user: "u1".to_string(),
            phone_number: "12-34".to_string(),
            payment_terms: "Bi-Weekly".to_string(),
            ..Default::default()
        };
        let errors = draft.errors(today());
        assert_eq!(errors.get("phoneNumber"), Some("Please enter a valid phone number"));

        let fixed = ClientDraft {
            phone_number: "0315 5874112".to_string(),
            ..draft
        };
        let client = fixed.validate(today()).unwrap();
        assert_eq!(client.payment_terms, Some(PaymentTerms::BiWeekly));
    }
}
