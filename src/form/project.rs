use chrono::NaiveDate;

use crate::{
    calc,
    form::{
        is_blank, is_valid_url, optional_positive, parse_choice, parse_date, require_choice,
        require_positive, require_text, Draft, FieldErrors, Repeatable,
    },
    model::{
        enums::{Choice, ProjectCategory, ProjectStatus, ProjectType},
        project::NewProject,
    },
};

/// Draft of a new project.
///
/// The cost fields are read-only in the form and kept in step with their inputs through the
/// setters below.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub customer: String,
    pub location: String,
    pub project_category: String,
    pub project_type: String,
    pub rate_per_square_foot: String,
    pub total_area: String,
    pub total_coverage_area: String,
    pub total_cost: String,
    pub labour_rate: String,
    pub total_labour_cost: String,
    pub start_date: String,
    /// Estimated completion date
    pub estimated_duration: String,
    pub contractors: Repeatable,
    pub drawings: Repeatable,
    pub contracts: Repeatable,
    pub description: String,
    pub status: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            customer: String::new(),
            location: String::new(),
            project_category: String::new(),
            project_type: String::new(),
            rate_per_square_foot: String::new(),
            total_area: String::new(),
            total_coverage_area: String::new(),
            total_cost: String::new(),
            labour_rate: String::new(),
            total_labour_cost: String::new(),
            start_date: String::new(),
            estimated_duration: String::new(),
            contractors: Repeatable::default(),
            drawings: Repeatable::default(),
            contracts: Repeatable::default(),
            description: String::new(),
            status: ProjectStatus::default().value().to_string(),
        }
    }
}

impl ProjectDraft {
    fn kind(&self) -> Option<ProjectType> {
        parse_choice(&self.project_type)
    }

    pub fn set_project_type(&mut self, value: String) {
        self.project_type = value;
        self.refresh_costs();
    }

    pub fn set_rate_per_square_foot(&mut self, value: String) {
        self.rate_per_square_foot = value;
        self.refresh_costs();
    }

    pub fn set_labour_rate(&mut self, value: String) {
        self.labour_rate = value;
        self.refresh_costs();
    }

    pub fn set_total_coverage_area(&mut self, value: String) {
        self.total_coverage_area = value;
        self.refresh_costs();
    }

    /// Recomputes the cost of the selected pricing type; the other cost is left alone
    fn refresh_costs(&mut self) {
        match self.kind() {
            Some(ProjectType::WithMaterial) => {
                self.total_cost = calc::recompute_total(
                    &self.total_cost,
                    &self.rate_per_square_foot,
                    &self.total_coverage_area,
                );
            }
            Some(ProjectType::LabourRate) => {
                self.total_labour_cost = calc::recompute_total(
                    &self.total_labour_cost,
                    &self.labour_rate,
                    &self.total_coverage_area,
                );
            }
            None => {}
        }
    }
}

fn check_urls(errors: &mut FieldErrors, field: &'static str, list: &Repeatable, message: &str) {
    if list.filled().iter().any(|url| !is_valid_url(url)) {
        errors.set(field, message);
    }
}

fn optional_date(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<NaiveDate> {
    if is_blank(raw) {
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.set(field, "Please enter a valid date");
    }
    parsed
}

impl Draft for ProjectDraft {
    type Valid = NewProject;

    fn validate(&self, _today: NaiveDate) -> Result<NewProject, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = require_text(&mut errors, "name", &self.name, "Project name is required");
        let customer = require_text(
            &mut errors,
            "customer",
            &self.customer,
            "Customer selection is required",
        );
        let location = require_text(&mut errors, "location", &self.location, "Location is required");
        let category = require_choice::<ProjectCategory>(
            &mut errors,
            "projectCategory",
            &self.project_category,
            "Project category is required",
        );
        let kind = require_choice::<ProjectType>(
            &mut errors,
            "projectType",
            &self.project_type,
            "Project type is required",
        );

        let rate_per_square_foot = match kind {
            Some(ProjectType::WithMaterial) => require_positive(
                &mut errors,
                "ratePerSquareFoot",
                &self.rate_per_square_foot,
                "Rate per square foot is required for material projects",
                "Please enter a valid rate per square foot",
            ),
            _ => None,
        };
        let labour_rate = match kind {
            Some(ProjectType::LabourRate) => require_positive(
                &mut errors,
                "labouRate",
                &self.labour_rate,
                "Labour rate is required for labour rate projects",
                "Please enter a valid labour rate",
            ),
            _ => None,
        };

        let coverage_area = optional_positive(
            &mut errors,
            "totalCoverageArea",
            &self.total_coverage_area,
            "Please enter a valid coverage area",
        );
        let total_area = optional_positive(
            &mut errors,
            "totalArea",
            &self.total_area,
            "Please enter a valid total area",
        );

        let start_date = optional_date(&mut errors, "startDate", &self.start_date);
        let completion = optional_date(&mut errors, "estimatedDuration", &self.estimated_duration);
        if let (Some(start), Some(end)) = (start_date, completion) {
            if end <= start {
                errors.set(
                    "estimatedDuration",
                    "Estimated completion date must be after start date",
                );
            }
        }

        check_urls(
            &mut errors,
            "drawings",
            &self.drawings,
            "Please enter valid URLs for drawings",
        );
        check_urls(
            &mut errors,
            "contracts",
            &self.contracts,
            "Please enter valid URLs for contracts",
        );

        let status = parse_choice::<ProjectStatus>(&self.status).unwrap_or_default();

        errors.into_result()?;
        let (
            Some(name),
            Some(customer),
            Some(location),
            Some(project_category),
            Some(project_type),
            Ok(total_coverage_area),
            Ok(total_area),
        ) = (name, customer, location, category, kind, coverage_area, total_area)
        else {
            return Err(FieldErrors::new());
        };

        let costs = calc::project_costs(
            project_type,
            rate_per_square_foot,
            labour_rate,
            total_coverage_area,
        );

        Ok(NewProject {
            name,
            customer,
            location,
            project_category,
            project_type,
            rate_per_square_foot,
            total_area,
            total_coverage_area,
            total_cost: costs.total_cost,
            labour_rate,
            total_labour_cost: costs.total_labour_cost,
            start_date,
            estimated_duration: completion,
            contractors: self.contractors.filled(),
            drawings: self.drawings.filled(),
            contracts: self.contracts.filled(),
            description: self.description.trim().to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn draft(kind: &str) -> ProjectDraft {
        let mut draft = ProjectDraft {
            name: "Gulberg Villa".to_string(),
            customer: "cl1".to_string(),
            location: "Lahore".to_string(),
            project_category: "residential".to_string(),
            ..Default::default()
        };
        draft.set_project_type(kind.to_string());
        draft
    }

    #[test]
    fn material_project_needs_rate_per_square_foot() {
        let errors = draft("withMaterial").errors(today());
        assert_eq!(
            errors.get("ratePerSquareFoot"),
            Some("Rate per square foot is required for material projects")
        );
        assert!(!errors.contains("labouRate"));
    }

    #[test]
    fn labour_project_needs_labour_rate() {
        let mut labour = draft("labourRate");
        labour.set_labour_rate("0".to_string());
        let errors = labour.errors(today());
        assert_eq!(errors.get("labouRate"), Some("Please enter a valid labour rate"));
    }

    #[test]
    fn costs_follow_their_inputs() {
        let mut project = draft("withMaterial");
        project.set_rate_per_square_foot("2500".to_string());
        project.set_total_coverage_area("1200".to_string());
        assert_eq!(project.total_cost, "3000000");
        assert_eq!(project.total_labour_cost, "");

        project.set_project_type("labourRate".to_string());
        project.set_labour_rate("400".to_string());
        assert_eq!(project.total_labour_cost, "480000");
        assert_eq!(project.total_cost, "3000000");
    }

    #[test]
    fn completion_must_follow_start() {
        let mut project = draft("labourRate");
        project.set_labour_rate("400".to_string());
        project.start_date = "2024-07-01".to_string();
        project.estimated_duration = "2024-07-01".to_string();
        assert_eq!(
            project.errors(today()).get("estimatedDuration"),
            Some("Estimated completion date must be after start date")
        );
    }

    #[test]
    fn url_lists_are_checked_and_blank_rows_dropped() {
        let mut project = draft("labourRate");
        project.set_labour_rate("400".to_string());
        project.drawings.set_at(0, "floor-plan.pdf");
        assert_eq!(
            project.errors(today()).get("drawings"),
            Some("Please enter valid URLs for drawings")
        );

        project.drawings.set_at(0, "https://files.urban.pk/floor-plan.pdf");
        project.drawings.append();
        project.contractors.set_at(0, "k1");
        project.contractors.append();

        let valid = project.validate(today()).unwrap();
        assert_eq!(valid.drawings, vec!["https://files.urban.pk/floor-plan.pdf".to_string()]);
        assert_eq!(valid.contractors, vec!["k1".to_string()]);
        assert!(valid.contracts.is_empty());
        assert_eq!(valid.status, ProjectStatus::Planning);
    }

    #[test]
    fn body_sends_only_the_selected_pricing() {
        let mut project = draft("withMaterial");
        project.set_rate_per_square_foot("2500".to_string());
        project.set_total_coverage_area("1200".to_string());
        project.labour_rate = "400".to_string();

        let body = serde_json::to_value(project.validate(today()).unwrap()).unwrap();
        assert_eq!(body["projectType"], "withMaterial");
        assert_eq!(body["totalCost"], 3_000_000.0);
        assert!(body.get("labouRate").is_none());
        assert!(body.get("totalLabourCost").is_none());
        assert_eq!(body["status"], "planning");
    }
}
