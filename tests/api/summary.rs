//! Tests for the summary routes and the printable reports built from them.

use urban_console::{
    model::enums::LedgerType,
    report::{render_contract_receipt, render_project_report, PrintMeta, ProjectReportKind},
};

use super::*;

fn meta() -> PrintMeta {
    PrintMeta::at(
        today()
            .and_hms_opt(15, 4, 5)
            .unwrap(),
    )
}

/// The contracts of a project come wrapped in `contracts`, not `data`.
#[tokio::test]
async fn contracts_by_project() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_document(
            "/api/payment/contracts/by-project/p1",
            serde_json::json!({ "contracts": [factory::contract("pc1", "p1", "k1", 500000.0)] }),
        )
        .build()
        .await?;

    let contracts = signed_in(&test)
        .contracts_by_project("p1")
        .await
        .map_err(client_error)?;

    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].contractor.company_name, "Shah Builders");
    assert_eq!(contracts[0].description, "Grey structure works");
    test.assert_mocks();

    Ok(())
}

/// A fetched contract summary prints as a receipt with every payment row.
#[tokio::test]
async fn contract_summary_prints_receipt() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_document(
            "/api/payment/contract-summary/pc1",
            factory::contract_summary(
                "pc1",
                vec![
                    factory::ledger_payment("pay1", "debit", 100000.0),
                    factory::ledger_payment("pay2", "debit", 50000.0),
                ],
            ),
        )
        .build()
        .await?;

    let summary = signed_in(&test)
        .contract_summary("pc1")
        .await
        .map_err(client_error)?;

    assert_eq!(summary.payments.len(), 2);
    assert_eq!(summary.payments[0].kind, LedgerType::Debit);
    assert_eq!(summary.payments[0].creator_name(), Some(TEST_USER_NAME));

    let html = render_contract_receipt(&summary, &meta());
    assert!(html.contains("Shah Builders"));
    assert!(html.contains("PKR 100,000.00"));
    assert!(html.contains("PKR 350,000.00"));
    test.assert_mocks();

    Ok(())
}

/// Both ledgers of a project decode and each prints its own report.
#[tokio::test]
async fn project_summary_prints_both_ledgers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_document(
            "/api/payment/full-summary/p1",
            factory::project_summary(
                "p1",
                vec![factory::ledger_payment("pay1", "credit", 200000.0)],
                vec![factory::material_payment("m1", "Bricks", 30000.0)],
            ),
        )
        .build()
        .await?;

    let summary = signed_in(&test)
        .project_summary("p1")
        .await
        .map_err(client_error)?;

    assert_eq!(summary.materials[0].quantity, Some(100.0));
    assert_eq!(summary.net, 120000.0);

    let payments = render_project_report(&summary, ProjectReportKind::ContractorPayments, &meta());
    assert!(payments.contains("PKR 200,000.00"));
    assert!(!payments.contains("Bricks"));

    let materials = render_project_report(&summary, ProjectReportKind::MaterialPayments, &meta());
    assert!(materials.contains("Bricks"));
    assert!(materials.contains("City Traders"));
    test.assert_mocks();

    Ok(())
}

/// A missing summary reports the fixed load message.
#[tokio::test]
async fn missing_project_summary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failure("GET", "/api/payment/full-summary/p9", 404, "Project not found")
        .build()
        .await?;

    let err = signed_in(&test).project_summary("p9").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load project payment summary");
    test.assert_mocks();

    Ok(())
}
