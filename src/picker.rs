//! Contract selection for the contractor payment form.
//!
//! A contract can only be chosen once both a project and a contractor are selected, and only
//! among the contracts that bind exactly that pair. Changing either upstream selection may
//! invalidate the chosen contract, in which case it is cleared.

use crate::model::contract::ContractDto;

/// Contracts binding `project_id` to `contractor_id`, in input order.
///
/// An empty id on either side means nothing is selected yet and yields no contracts.
pub fn filter_contracts<'a>(
    contracts: &'a [ContractDto],
    project_id: &str,
    contractor_id: &str,
) -> Vec<&'a ContractDto> {
    if project_id.is_empty() || contractor_id.is_empty() {
        return Vec::new();
    }
    contracts
        .iter()
        .filter(|c| c.project.id == project_id && c.contractor.id == contractor_id)
        .collect()
}

/// Keeps `selected` only while it is still among `available`; an empty selection stays empty.
pub fn retain_selection(selected: &str, available: &[&ContractDto]) -> String {
    if available.iter().any(|c| c.id == selected) {
        selected.to_string()
    } else {
        String::new()
    }
}

/// Project, contractor and contract selections of the payment form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractPicker {
    pub project: String,
    pub contractor: String,
    pub contract: String,
}

impl ContractPicker {
    pub fn set_project(&mut self, project: String, contracts: &[ContractDto]) {
        self.project = project;
        self.revalidate(contracts);
    }

    pub fn set_contractor(&mut self, contractor: String, contracts: &[ContractDto]) {
        self.contractor = contractor;
        self.revalidate(contracts);
    }

    /// Selects a contract; ignored if it does not bind the current pair
    pub fn set_contract(&mut self, contract: String, contracts: &[ContractDto]) {
        let available = self.available(contracts);
        self.contract = retain_selection(&contract, &available);
    }

    /// Contracts selectable for the current project and contractor
    pub fn available<'a>(&self, contracts: &'a [ContractDto]) -> Vec<&'a ContractDto> {
        filter_contracts(contracts, &self.project, &self.contractor)
    }

    /// Whether the contract select should be enabled
    pub fn contract_enabled(&self) -> bool {
        !self.project.is_empty() && !self.contractor.is_empty()
    }

    fn revalidate(&mut self, contracts: &[ContractDto]) {
        let available = self.available(contracts);
        self.contract = retain_selection(&self.contract, &available);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contract::{CompanyRefDto, ContractProjectRefDto};

    fn contract(id: &str, project: &str, contractor: &str) -> ContractDto {
        ContractDto {
            id: id.to_string(),
            project: ContractProjectRefDto {
                id: project.to_string(),
                ..Default::default()
            },
            contractor: CompanyRefDto {
                id: contractor.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn contracts() -> Vec<ContractDto> {
        vec![
            contract("c1", "p1", "k1"),
            contract("c2", "p1", "k2"),
            contract("c3", "p2", "k1"),
            contract("c4", "p1", "k1"),
        ]
    }

    fn ids(list: &[&ContractDto]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn filters_on_both_ids() {
        let all = contracts();
        assert_eq!(ids(&filter_contracts(&all, "p1", "k1")), vec!["c1", "c4"]);
        assert_eq!(ids(&filter_contracts(&all, "p2", "k1")), vec!["c3"]);
        assert!(filter_contracts(&all, "p2", "k2").is_empty());
    }

    #[test]
    fn missing_selection_yields_nothing() {
        let all = contracts();
        assert!(filter_contracts(&all, "", "k1").is_empty());
        assert!(filter_contracts(&all, "p1", "").is_empty());
    }

    #[test]
    fn changing_project_clears_stale_contract() {
        let all = contracts();
        let mut picker = ContractPicker::default();
        picker.set_project("p1".to_string(), &all);
        picker.set_contractor("k1".to_string(), &all);
        picker.set_contract("c4".to_string(), &all);
        assert_eq!(picker.contract, "c4");

        picker.set_project("p2".to_string(), &all);
        assert_eq!(picker.contract, "");
    }

    #[test]
    fn selection_survives_when_still_valid() {
        let all = contracts();
        let mut picker = ContractPicker::default();
        picker.set_project("p1".to_string(), &all);
        picker.set_contractor("k1".to_string(), &all);
        picker.set_contract("c1".to_string(), &all);

        picker.set_project("p1".to_string(), &all);
        assert_eq!(picker.contract, "c1");
    }

    #[test]
    fn contract_outside_pair_is_rejected() {
        let all = contracts();
        let mut picker = ContractPicker::default();
        assert!(!picker.contract_enabled());
        picker.set_project("p1".to_string(), &all);
        picker.set_contractor("k2".to_string(), &all);
        picker.set_contract("c1".to_string(), &all);
        assert_eq!(picker.contract, "");
    }
}
