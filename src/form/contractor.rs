use chrono::NaiveDate;

use crate::{
    form::{is_valid_phone, require_choice, require_text, Draft, FieldErrors},
    model::{
        contractor::NewContractor,
        enums::{ContractorType, PaymentTerms},
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractorDraft {
    pub user: String,
    pub company_name: String,
    pub contractor_type: String,
    pub payment_terms: String,
    pub bank_details: String,
    pub address: String,
    pub phone_number: String,
}

impl Draft for ContractorDraft {
    type Valid = NewContractor;

    fn validate(&self, _today: NaiveDate) -> Result<NewContractor, FieldErrors> {
        let mut errors = FieldErrors::new();

        let user = require_text(&mut errors, "user", &self.user, "User selection is required");
        let company_name = require_text(
            &mut errors,
            "companyName",
            &self.company_name,
            "Company name is required",
        );
        let contractor_type = require_choice::<ContractorType>(
            &mut errors,
            "contractorType",
            &self.contractor_type,
            "Contractor type is required",
        );
        let payment_terms = require_choice::<PaymentTerms>(
            &mut errors,
            "paymentTerms",
            &self.payment_terms,
            "Payment terms are required",
        );

        if !self.phone_number.is_empty() && !is_valid_phone(&self.phone_number) {
            errors.set("phoneNumber", "Please enter a valid phone number");
        }

        errors.into_result()?;
        let (Some(user), Some(company_name), Some(contractor_type), Some(payment_terms)) =
            (user, company_name, contractor_type, payment_terms)
        else {
            return Err(FieldErrors::new());
        };

        Ok(NewContractor {
            user,
            company_name,
            contractor_type,
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
    fn empty_draft_reports_required_fields() {
        let errors = ContractorDraft::default().errors(today());
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["companyName", "contractorType", "paymentTerms", "user"]
        );
    }

    #[test]
    fn converts_to_typed_body() {
        let draft = ContractorDraft {
            user: "u1".to_string(),
            company_name: " Khan Builders ".to_string(),
            contractor_type: "Grey Structure".to_string(),
            payment_terms: "Weekly".to_string(),
            phone_number: "0333 3834040".to_string(),
            ..Default::default()
        };
        let contractor = draft.validate(today()).unwrap();
        assert_eq!(contractor.company_name, "Khan Builders");
        assert_eq!(contractor.contractor_type, ContractorType::GreyStructure);

        let body = serde_json::to_value(&contractor).unwrap();
        assert_eq!(body["contractorType"], "Grey Structure");
        assert_eq!(body["paymentTerms"], "Weekly");
    }
}
