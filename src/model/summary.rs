use serde::{Deserialize, Serialize};

use crate::model::{
    api::Reference,
    contract::{CompanyRefDto, ContractDto},
    enums::LedgerType,
    material::MaterialPaymentDto,
};

/// Creator of a ledger entry; the backend sends `null` once the user is gone
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user_name: String,
}

/// Contract as embedded in a project ledger entry
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerContractRefDto {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub contract_type: String,
}

/// One payment row in a contract or project summary
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerPaymentDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub contractor: Option<CompanyRefDto>,
    #[serde(default)]
    pub contract: Option<Reference<LedgerContractRefDto>>,
    #[serde(rename = "type", default)]
    pub kind: LedgerType,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub work_description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub receipt_photo: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_by: Option<CreatorRefDto>,
    #[serde(default)]
    pub created_at: String,
}

impl LedgerPaymentDto {
    pub fn contractor_name(&self) -> Option<&str> {
        self.contractor.as_ref().map(|c| c.company_name.as_str())
    }

    pub fn creator_name(&self) -> Option<&str> {
        self.created_by.as_ref().map(|c| c.user_name.as_str())
    }
}

/// `GET /api/payment/contract-summary/:id`
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPaymentSummary {
    #[serde(default)]
    pub project_contract_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub contractor_name: String,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub total_payments: f64,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub payments: Vec<LedgerPaymentDto>,
    #[serde(default)]
    pub contract: Option<ContractDto>,
}

/// `GET /api/payment/full-summary/:id`
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPaymentSummary {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub project_cost: f64,
    #[serde(default)]
    pub total_payment_received: f64,
    #[serde(default)]
    pub total_debits: f64,
    #[serde(default)]
    pub total_material_payments: f64,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub payments: Vec<LedgerPaymentDto>,
    #[serde(default)]
    pub materials: Vec<MaterialPaymentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_contract_summary_with_null_creator() {
        let json = r#"{
            "projectContractId": "c1",
            "projectName": "Gulberg Villa",
            "contractorName": "Khan Builders",
            "contractType": "fixed_price",
            "totalAmount": 250000,
            "totalPayments": 100000,
            "net": 150000,
            "payments": [{
                "_id": "p1",
                "project": "pr1",
                "contractor": null,
                "contract": "c1",
                "type": "debit",
                "date": "2024-05-02T00:00:00.000Z",
                "amount": 100000,
                "paymentMethod": "cash",
                "status": "paid",
                "createdBy": null,
                "createdAt": "2024-05-02T10:00:00.000Z"
            }],
            "contract": {
                "_id": "c1",
                "project": {"_id": "pr1", "name": "Gulberg Villa"},
                "contractor": {"_id": "k1", "companyName": "Khan Builders"},
                "contractType": "fixed_price",
                "totalAmount": 250000,
                "startDate": "2024-05-01",
                "isTerminated": false,
                "Description": "",
                "payments": ["p1"]
            }
        }"#;

        let summary: ContractPaymentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.payments.len(), 1);
        let payment = &summary.payments[0];
        assert_eq!(payment.kind, LedgerType::Debit);
        assert_eq!(payment.creator_name(), None);
        assert_eq!(payment.contract, Some(Reference::Id("c1".to_string())));
        assert_eq!(summary.contract.map(|c| c.payments.len()), Some(1));
    }

    #[test]
    fn decodes_project_summary_materials() {
        let json = r#"{
            "projectId": "pr1",
            "projectName": "Gulberg Villa",
            "projectType": "withMaterial",
            "projectCost": 5000000,
            "totalPaymentReceived": 1200000,
            "totalDebits": 300000,
            "totalMaterialPayments": 150000,
            "net": 750000,
            "payments": [{
                "_id": "p2",
                "contract": {"_id": "c1", "contractType": "lump_sum"},
                "contractor": {"_id": "k1", "companyName": "Khan Builders"},
                "type": "credit",
                "amount": 1200000
            }],
            "materials": [{
                "_id": "m1",
                "materialDetail": "Cement",
                "materialProvider": "Lucky",
                "MaterialQuantity": 100,
                "MaterialRate": 1500,
                "totalAmount": 150000,
                "date": "2024-05-03"
            }]
        }"#;

        let summary: ProjectPaymentSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.materials[0].quantity, Some(100.0));
        assert_eq!(summary.payments[0].contractor_name(), Some("Khan Builders"));
        assert!(matches!(
            summary.payments[0].contract,
            Some(Reference::Populated(ref c)) if c.contract_type == "lump_sum"
        ));
    }
}
