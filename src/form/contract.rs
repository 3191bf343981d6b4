use chrono::NaiveDate;

use crate::{
    form::{is_blank, parse_date, require_positive, require_text, Draft, FieldErrors},
    model::contract::NewContract,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractDraft {
    pub project: String,
    pub contractor: String,
    /// Free text; the select only offers suggestions
    pub contract_type: String,
    pub total_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Draft for ContractDraft {
    type Valid = NewContract;

    fn validate(&self, today: NaiveDate) -> Result<NewContract, FieldErrors> {
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
        let total_amount = require_positive(
            &mut errors,
            "totalAmount",
            &self.total_amount,
            "Total amount is required",
            "Please enter a valid amount greater than 0",
        );

        let start_date = if is_blank(&self.start_date) {
            errors.set("startDate", "Start date is required");
            None
        } else {
            let parsed = parse_date(&self.start_date);
            match parsed {
                None => errors.set("startDate", "Please enter a valid date"),
                Some(start) if start < today => {
                    errors.set("startDate", "Start date cannot be in the past")
                }
                Some(_) => {}
            }
            parsed
        };

        let end_date = if is_blank(&self.end_date) {
            None
        } else {
            let parsed = parse_date(&self.end_date);
            match (start_date, parsed) {
                (_, None) => errors.set("endDate", "Please enter a valid date"),
                (Some(start), Some(end)) if end <= start => {
                    errors.set("endDate", "End date must be after start date")
                }
                _ => {}
            }
            parsed
        };

        errors.into_result()?;
        let (Some(project), Some(contractor), Some(total_amount), Some(start_date)) =
            (project, contractor, total_amount, start_date)
        else {
            return Err(FieldErrors::new());
        };

        Ok(NewContract {
            project,
            contractor,
            contract_type: self.contract_type.trim().to_string(),
            total_amount,
            start_date,
            end_date,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> ContractDraft {
        ContractDraft {
            project: "pr1".to_string(),
            contractor: "k1".to_string(),
            contract_type: "fixed_price".to_string(),
            total_amount: "250000".to_string(),
            start_date: "2024-06-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        let draft = ContractDraft {
            end_date: "2024-05-01".to_string(),
            ..draft()
        };
        let errors = draft.errors(day(2024, 1, 1));
        assert_eq!(errors.get("endDate"), Some("End date must be after start date"));
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let draft = ContractDraft {
            end_date: "2024-06-01".to_string(),
            ..draft()
        };
        assert!(draft.errors(day(2024, 1, 1)).contains("endDate"));
    }

    #[test]
    fn start_in_the_past_is_rejected() {
        let errors = draft().errors(day(2024, 6, 2));
        assert_eq!(errors.get("startDate"), Some("Start date cannot be in the past"));
        assert!(draft().errors(day(2024, 6, 1)).is_empty());
    }

    #[test]
    fn optional_end_date_is_omitted() {
        let contract = draft().validate(day(2024, 6, 1)).unwrap();
        assert_eq!(contract.end_date, None);

        let body = serde_json::to_value(&contract).unwrap();
        assert!(body.get("endDate").is_none());
        assert_eq!(body["startDate"], "2024-06-01");
        assert_eq!(body["totalAmount"], 250000.0);
        assert_eq!(body["Description"], "");
    }

    #[test]
    fn amount_must_be_positive() {
        let zero = ContractDraft {
            total_amount: "0".to_string(),
            ..draft()
        };
        assert_eq!(
            zero.errors(day(2024, 6, 1)).get("totalAmount"),
            Some("Please enter a valid amount greater than 0")
        );

        let blank = ContractDraft {
            total_amount: " ".to_string(),
            ..draft()
        };
        assert_eq!(
            blank.errors(day(2024, 6, 1)).get("totalAmount"),
            Some("Total amount is required")
        );
    }
}
