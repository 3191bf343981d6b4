use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::{Reference, UserRefDto},
    enums::{ProjectCategory, ProjectStatus, ProjectType},
};

/// The customer of a project as embedded by the project list route
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user: Option<Reference<UserRefDto>>,
}

/// A project as returned by `GET /api/project/get-all-projects`
///
/// Enum-like fields are kept as text: list screens must render whatever the backend stored.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_code: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub project_category: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub rate_per_square_foot: Option<f64>,
    #[serde(default)]
    pub total_area: Option<f64>,
    #[serde(default)]
    pub total_coverage_area: Option<f64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(rename = "labouRate", default)]
    pub labour_rate: Option<f64>,
    #[serde(default)]
    pub total_labour_cost: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub customer: Option<Reference<CustomerRefDto>>,
}

impl ProjectDto {
    /// `Name (CODE)` as shown in project selects
    pub fn option_label(&self) -> String {
        if self.project_code.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.project_code)
        }
    }

    /// User name of the project's customer, when both levels were populated
    pub fn customer_name(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(Reference::populated)
            .and_then(|c| c.user.as_ref())
            .and_then(Reference::populated)
            .map(|u| u.user_name.as_str())
    }

    /// The headline cost of the project according to its pricing type
    pub fn headline_cost(&self) -> Option<f64> {
        match self.project_type.as_str() {
            "withMaterial" => self.total_cost,
            "labourRate" => self.total_labour_cost,
            _ => self.total_cost.or(self.total_labour_cost),
        }
    }
}

/// Body of `POST /api/project/create-project`
///
/// Numeric fields that were left blank are omitted rather than sent as zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewProject {
    pub name: String,
    pub customer: String,
    pub location: String,
    pub project_category: ProjectCategory,
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_square_foot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_coverage_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(rename = "labouRate", skip_serializing_if = "Option::is_none")]
    pub labour_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_labour_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Estimated completion date; the backend field keeps its historical name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<NaiveDate>,
    pub contractors: Vec<String>,
    pub drawings: Vec<String>,
    pub contracts: Vec<String>,
    pub description: String,
    pub status: ProjectStatus,
}
