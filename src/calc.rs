//! Derived totals shown as read-only fields in the forms.
//!
//! A total is recomputed whenever one of its inputs changes. When either input is blank or not
//! a number the previous total is kept as is, so a half-typed value never clears it.

use crate::{form::parse_number, model::enums::ProjectType};

/// Product of two numeric strings, if both parse as finite numbers
pub fn product(a: &str, b: &str) -> Option<f64> {
    Some(parse_number(a)? * parse_number(b)?)
}

/// Recomputes a derived total from its two inputs.
///
/// # Arguments
/// - `current` - The total currently displayed
/// - `a`, `b` - The raw inputs (quantity and rate, or rate and area)
///
/// # Returns
/// The new total as text, or `current` unchanged when either input does not parse.
pub fn recompute_total(current: &str, a: &str, b: &str) -> String {
    match product(a, b) {
        Some(total) => total.to_string(),
        None => current.to_string(),
    }
}

/// The two cost roll-ups a project can carry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectCosts {
    pub total_cost: Option<f64>,
    pub total_labour_cost: Option<f64>,
}

/// Rolls up the cost of a project from its rate and coverage area.
///
/// Material projects are priced per square foot of coverage, labour-only projects by labour
/// rate times coverage. Only the roll-up matching `kind` is produced.
pub fn project_costs(
    kind: ProjectType,
    rate_per_square_foot: Option<f64>,
    labour_rate: Option<f64>,
    coverage_area: Option<f64>,
) -> ProjectCosts {
    let times_area = |rate: Option<f64>| Some(rate? * coverage_area?);
    match kind {
        ProjectType::WithMaterial => ProjectCosts {
            total_cost: times_area(rate_per_square_foot),
            total_labour_cost: None,
        },
        ProjectType::LabourRate => ProjectCosts {
            total_cost: None,
            total_labour_cost: times_area(labour_rate),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_of_numeric_strings() {
        assert_eq!(product("100", "1500"), Some(150000.0));
        assert_eq!(product(" 2.5 ", "4"), Some(10.0));
        assert_eq!(product("", "4"), None);
        assert_eq!(product("4", "four"), None);
    }

    #[test]
    fn product_matches_float_multiplication() {
        for (a, b) in [(0.1, 0.2), (1234.5, 0.01), (-3.0, 7.25), (1e6, 1e-3)] {
            assert_eq!(product(&a.to_string(), &b.to_string()), Some(a * b));
        }
    }

    #[test]
    fn unparsable_input_keeps_current_total() {
        assert_eq!(recompute_total("150000", "100", ""), "150000");
        assert_eq!(recompute_total("150000", "1e", "5"), "150000");
        assert_eq!(recompute_total("", "abc", "5"), "");
        assert_eq!(recompute_total("150000", "10", "5"), "50");
    }

    #[test]
    fn project_roll_up_by_type() {
        let material = project_costs(ProjectType::WithMaterial, Some(2500.0), Some(400.0), Some(1200.0));
        assert_eq!(material.total_cost, Some(3_000_000.0));
        assert_eq!(material.total_labour_cost, None);

        let labour = project_costs(ProjectType::LabourRate, None, Some(400.0), Some(1200.0));
        assert_eq!(labour.total_labour_cost, Some(480_000.0));

        let no_area = project_costs(ProjectType::LabourRate, None, Some(400.0), None);
        assert_eq!(no_area, ProjectCosts::default());
    }
}
