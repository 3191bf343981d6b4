//! Tests for the create routes.

use serde_json::json;
use urban_console::form::{
    material::MaterialDraft, payment::PaymentDraft, project_payment::ProjectPaymentDraft, Draft,
};

use super::*;

fn invalid<E: std::fmt::Debug>(errors: E) -> TestError {
    TestError::Client(format!("{errors:?}"))
}

/// A contractor payment carries the contract and is attributed to the signed-in user.
#[tokio::test]
async fn contractor_payment_is_attributed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_create(
            "/api/payment/create-payment",
            json!({
                "project": "p1",
                "contractor": "k1",
                "contract": "pc1",
                "amount": 25000.0,
                "paymentMethod": "bank_transfer",
                "transactionId": "TX-9",
                "createdBy": TEST_USER_ID,
            }),
        )
        .build()
        .await?;

    let payment = PaymentDraft {
        project: "p1".to_string(),
        contractor: "k1".to_string(),
        contract: "pc1".to_string(),
        date: "2024-06-01".to_string(),
        amount: "25000".to_string(),
        payment_method: "bank_transfer".to_string(),
        transaction_id: "TX-9".to_string(),
        ..Default::default()
    }
    .validate(today())
    .map_err(invalid)?;

    signed_in(&test)
        .create_payment(&payment)
        .await
        .map_err(client_error)?;
    test.assert_mocks();

    Ok(())
}

/// Signed-out users cannot record payments; nothing reaches the backend.
#[tokio::test]
async fn contractor_payment_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/payment/create-payment")
                .expect(0)
                .create()
        })
        .build()
        .await?;

    let payment = PaymentDraft {
        project: "p1".to_string(),
        contractor: "k1".to_string(),
        date: "2024-06-01".to_string(),
        amount: "100".to_string(),
        payment_method: "cash".to_string(),
        ..Default::default()
    }
    .validate(today())
    .map_err(invalid)?;

    let err = anonymous(&test).create_payment(&payment).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to create payment. Please try again.");
    test.assert_mocks();

    Ok(())
}

/// The material total derived from quantity and rate is what gets sent.
#[tokio::test]
async fn material_payment_sends_derived_total() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_create(
            "/api/material/add-material-payment",
            json!({
                "project": "p1",
                "materialDetail": "Cement",
                "MaterialQuantity": 40.0,
                "MaterialRate": 1250.0,
                "totalAmount": 50000.0,
            }),
        )
        .build()
        .await?;

    let mut draft = MaterialDraft::dated(today());
    draft.project = "p1".to_string();
    draft.material_detail = "Cement".to_string();
    draft.set_quantity("40".to_string());
    draft.set_rate("1250".to_string());
    let material = draft.validate(today()).map_err(invalid)?;

    signed_in(&test)
        .create_material_payment(&material)
        .await
        .map_err(client_error)?;
    test.assert_mocks();

    Ok(())
}

/// A project debit is sent with both amount fields and the creator.
#[tokio::test]
async fn project_payment_sends_ledger_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_create(
            "/api/payment/add-payment-for-project",
            json!({
                "project": "p1",
                "type": "debit",
                "paymentAmount": 7000.0,
                "amount": 7000.0,
                "paymentMethod": "cash",
                "createdBy": TEST_USER_ID,
            }),
        )
        .build()
        .await?;

    let mut draft = ProjectPaymentDraft::dated(today());
    draft.project = "p1".to_string();
    draft.kind = "debit".to_string();
    draft.payment_amount = "7000".to_string();
    draft.payment_method = "cash".to_string();
    let payment = draft.validate(today()).map_err(invalid)?;

    signed_in(&test)
        .create_project_payment(&payment)
        .await
        .map_err(client_error)?;
    test.assert_mocks();

    Ok(())
}

/// A rejected create shows the generic retry message.
#[tokio::test]
async fn rejected_create_shows_retry_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failure(
            "POST",
            "/api/material/add-material-payment",
            400,
            "Project not found",
        )
        .build()
        .await?;

    let mut draft = MaterialDraft::dated(today());
    draft.project = "missing".to_string();
    draft.total_amount = "900".to_string();
    let material = draft.validate(today()).map_err(invalid)?;

    let err = signed_in(&test)
        .create_material_payment(&material)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to create material payment. Please try again."
    );
    test.assert_mocks();

    Ok(())
}
