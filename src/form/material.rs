use chrono::NaiveDate;

use crate::{
    calc,
    form::{
        optional_positive, require_past_date, require_positive, require_text, Draft, FieldErrors,
        DATE_FORMAT,
    },
    model::material::NewMaterialPayment,
};

/// Draft of a material purchase. `total_amount` is normally derived from quantity and rate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialDraft {
    pub project: String,
    pub material_detail: String,
    pub material_provider: String,
    pub quantity: String,
    pub rate: String,
    pub total_amount: String,
    pub date: String,
}

impl MaterialDraft {
    pub fn dated(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Sets the quantity and refreshes the derived total
    pub fn set_quantity(&mut self, value: String) {
        self.quantity = value;
        self.refresh_total();
    }

    /// Sets the rate and refreshes the derived total
    pub fn set_rate(&mut self, value: String) {
        self.rate = value;
        self.refresh_total();
    }

    fn refresh_total(&mut self) {
        self.total_amount = calc::recompute_total(&self.total_amount, &self.quantity, &self.rate);
    }
}

impl Draft for MaterialDraft {
    type Valid = NewMaterialPayment;

    fn validate(&self, today: NaiveDate) -> Result<NewMaterialPayment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let project = require_text(
            &mut errors,
            "project",
            &self.project,
            "Project selection is required",
        );
        let total_amount = require_positive(
            &mut errors,
            "totalAmount",
            &self.total_amount,
            "Total amount is required",
            "Please enter a valid amount greater than 0",
        );
        let date = require_past_date(&mut errors, "date", &self.date, today);
        let quantity = optional_positive(
            &mut errors,
            "MaterialQuantity",
            &self.quantity,
            "Please enter a valid quantity greater than 0",
        );
        let rate = optional_positive(
            &mut errors,
            "MaterialRate",
            &self.rate,
            "Please enter a valid rate greater than 0",
        );

        errors.into_result()?;
        let (Some(project), Some(total_amount), Some(date), Ok(quantity), Ok(rate)) =
            (project, total_amount, date, quantity, rate)
        else {
            return Err(FieldErrors::new());
        };

        Ok(NewMaterialPayment {
            project,
            material_detail: self.material_detail.trim().to_string(),
            material_provider: self.material_provider.trim().to_string(),
            quantity,
            rate,
            total_amount,
            date,
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
    fn total_follows_quantity_and_rate() {
        let mut draft = MaterialDraft::dated(today());
        draft.set_quantity("100".to_string());
        assert_eq!(draft.total_amount, "");

        draft.set_rate("1500".to_string());
        assert_eq!(draft.total_amount, "150000");

        draft.set_rate("15x".to_string());
        assert_eq!(draft.total_amount, "150000");
    }

    #[test]
    fn quantity_and_rate_are_optional_but_positive() {
        let draft = MaterialDraft {
            project: "pr1".to_string(),
            total_amount: "5000".to_string(),
            ..MaterialDraft::dated(today())
        };
        let payment = draft.validate(today()).unwrap();
        assert_eq!(payment.quantity, None);

        let negative = MaterialDraft {
            quantity: "-3".to_string(),
            rate: "abc".to_string(),
            ..draft
        };
        let errors = negative.errors(today());
        assert_eq!(
            errors.get("MaterialQuantity"),
            Some("Please enter a valid quantity greater than 0")
        );
        assert_eq!(errors.get("MaterialRate"), Some("Please enter a valid rate greater than 0"));
    }

    #[test]
    fn body_uses_backend_field_names() {
        let mut draft = MaterialDraft {
            project: "pr1".to_string(),
            material_detail: "Cement".to_string(),
            ..MaterialDraft::dated(today())
        };
        draft.set_quantity("10".to_string());
        draft.set_rate("2.5".to_string());

        let body = serde_json::to_value(draft.validate(today()).unwrap()).unwrap();
        assert_eq!(body["MaterialQuantity"], 10.0);
        assert_eq!(body["MaterialRate"], 2.5);
        assert_eq!(body["totalAmount"], 25.0);
        assert_eq!(body["materialDetail"], "Cement");
    }
}
