//! Factory functions for backend response bodies.
//!
//! Records use the backend's field names (`_id`, camelCase, the `labouRate` spelling) so the
//! console's DTOs are decoded exactly as they would be in production.

use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_TOKEN, TEST_USER_ID, TEST_USER_NAME};

/// Body of a successful login
pub fn login_response() -> Value {
    json!({
        "token": TEST_TOKEN,
        "user": {
            "_id": TEST_USER_ID,
            "userName": TEST_USER_NAME,
            "email": TEST_EMAIL,
        }
    })
}

/// Failure body; the backend reports most errors under `message`
pub fn error_message(message: &str) -> Value {
    json!({ "message": message })
}

pub fn user(id: &str, user_name: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "userName": user_name,
        "email": format!("{user_name}@urban.pk"),
        "role": "User",
        "status": "active",
        "createdAt": created_at,
        "updatedAt": created_at,
    })
}

/// A client whose user reference is populated
pub fn client(id: &str, user_name: &str) -> Value {
    json!({
        "_id": id,
        "user": { "_id": format!("u-{id}"), "userName": user_name, "email": format!("{user_name}@urban.pk") },
        "paymentTerms": "Monthly",
        "phoneNumber": "0300 1234567",
        "bankDetails": "",
        "address": "Lahore",
        "isActive": true,
    })
}

pub fn contractor(id: &str, company_name: &str) -> Value {
    json!({
        "_id": id,
        "user": format!("u-{id}"),
        "companyName": company_name,
        "contractorType": "Grey Structure",
        "paymentTerms": "Weekly",
        "bankDetails": "",
        "address": "Islamabad",
        "phoneNumber": "0311 7654321",
    })
}

/// A labour-rate project costed at 1000 sq ft × 250
pub fn project(id: &str, name: &str, code: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "projectCode": code,
        "location": "DHA Phase 6",
        "projectCategory": "residential",
        "projectType": "labourRate",
        "status": "ongoing",
        "labouRate": 250.0,
        "totalCoverageArea": 1000.0,
        "totalLabourCost": 250000.0,
        "startDate": "2024-03-01T00:00:00.000Z",
        "customer": { "_id": "c1", "userName": "khan" },
    })
}

pub fn contract(id: &str, project_id: &str, contractor_id: &str, total_amount: f64) -> Value {
    json!({
        "_id": id,
        "project": { "_id": project_id, "name": "Villa 12", "projectCode": "V-12" },
        "contractor": { "_id": contractor_id, "companyName": "Shah Builders" },
        "contractType": "fixed_price",
        "totalAmount": total_amount,
        "startDate": "2024-03-01T00:00:00.000Z",
        "endDate": null,
        "isTerminated": false,
        "Description": "Grey structure works",
        "payments": [],
    })
}

/// A ledger entry as embedded in contract and project summaries
pub fn ledger_payment(id: &str, kind: &str, amount: f64) -> Value {
    json!({
        "_id": id,
        "contractor": { "_id": "k1", "companyName": "Shah Builders" },
        "type": kind,
        "date": "2024-05-10T00:00:00.000Z",
        "amount": amount,
        "paymentMethod": "bank_transfer",
        "transactionId": "TX-1001",
        "workDescription": "Slab casting",
        "status": "paid",
        "createdBy": { "_id": TEST_USER_ID, "userName": TEST_USER_NAME },
        "createdAt": "2024-05-10T09:30:00.000Z",
    })
}

pub fn material_payment(id: &str, detail: &str, total_amount: f64) -> Value {
    json!({
        "_id": id,
        "materialDetail": detail,
        "materialProvider": "City Traders",
        "MaterialQuantity": 100.0,
        "MaterialRate": total_amount / 100.0,
        "totalAmount": total_amount,
        "date": "2024-05-12T00:00:00.000Z",
        "createdAt": "2024-05-12T10:00:00.000Z",
    })
}

pub fn contract_summary(contract_id: &str, payments: Vec<Value>) -> Value {
    json!({
        "projectContractId": contract_id,
        "projectName": "Villa 12",
        "contractorName": "Shah Builders",
        "contractType": "fixed_price",
        "totalAmount": 500000.0,
        "totalPayments": 150000.0,
        "net": 350000.0,
        "payments": payments,
    })
}

pub fn project_summary(project_id: &str, payments: Vec<Value>, materials: Vec<Value>) -> Value {
    json!({
        "projectId": project_id,
        "projectName": "Villa 12",
        "projectType": "labourRate",
        "projectCost": 250000.0,
        "totalPaymentReceived": 200000.0,
        "totalDebits": 50000.0,
        "totalMaterialPayments": 30000.0,
        "net": 120000.0,
        "payments": payments,
        "materials": materials,
    })
}

/// Wraps `items` the way every list route does
pub fn data(items: Vec<Value>) -> Value {
    json!({ "data": items })
}
