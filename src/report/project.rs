use std::fmt::Write;

use crate::{
    format::{display_date, format_pkr},
    model::{enums::Choice, summary::ProjectPaymentSummary},
    report::{escape, ledger_css, net_css, or_dash, PrintMeta},
};

/// Which ledger of a project a report covers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectReportKind {
    ContractorPayments,
    MaterialPayments,
}

impl ProjectReportKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::ContractorPayments => "Contractor Payments",
            Self::MaterialPayments => "Material Payments",
        }
    }
}

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; }
h2 { margin-bottom: 4px; }
.generated { color: #666; font-size: 12px; margin-bottom: 20px; }
.summary { display: flex; gap: 24px; margin-bottom: 20px; }
.summary div { padding: 10px 14px; border: 1px solid #dee2e6; border-radius: 6px; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #dee2e6; padding: 8px; text-align: left; font-size: 12px; }
th { background: #f8f9fa; }
.amount { text-align: right; font-weight: bold; }
.credit { color: #28a745; }
.debit { color: #dc3545; }
@media print { body { margin: 0; } }
"#;

/// Renders one ledger of a project as a printable table.
pub fn render_project_report(
    summary: &ProjectPaymentSummary,
    kind: ProjectReportKind,
    meta: &PrintMeta,
) -> String {
    let title = format!("{} - {}", summary.project_name, kind.title());
    let mut html = String::with_capacity(2048);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<h2>{title} Report</h2>
<div class="generated">Generated on {date}</div>
<div class="summary">
  <div><strong>Project Cost:</strong> {cost}</div>
  <div><strong>Total Received:</strong> {received}</div>
  <div class="{net_css}"><strong>Net Amount:</strong> {net}</div>
</div>
"#,
        title = escape(&title),
        date = meta.date(),
        cost = format_pkr(summary.project_cost),
        received = format_pkr(summary.total_payment_received),
        net_css = net_css(summary.net),
        net = format_pkr(summary.net),
    );

    match kind {
        ProjectReportKind::ContractorPayments => payments_table(&mut html, summary),
        ProjectReportKind::MaterialPayments => materials_table(&mut html, summary),
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn payments_table(html: &mut String, summary: &ProjectPaymentSummary) {
    html.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Contractor</th><th>Type</th><th>Amount</th><th>Method</th><th>Status</th><th>Description</th></tr></thead>\n<tbody>\n",
    );
    if summary.payments.is_empty() {
        html.push_str("<tr><td colspan=\"7\">No payments recorded</td></tr>\n");
    }
    for payment in &summary.payments {
        let kind = payment.kind.value();
        let _ = writeln!(
            html,
            r#"<tr><td>{date}</td><td>{contractor}</td><td class="{css}">{kind}</td><td class="amount {css}">{amount}</td><td>{method}</td><td>{status}</td><td>{work}</td></tr>"#,
            date = display_date(&payment.date),
            contractor = or_dash(payment.contractor_name(), "-"),
            css = ledger_css(kind),
            kind = kind.to_uppercase(),
            amount = format_pkr(payment.amount),
            method = escape(&payment.payment_method),
            status = escape(&payment.status),
            work = or_dash(payment.work_description.as_deref(), "-"),
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn materials_table(html: &mut String, summary: &ProjectPaymentSummary) {
    html.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Material Detail</th><th>Provider</th><th>Quantity</th><th>Rate</th><th>Total Amount</th></tr></thead>\n<tbody>\n",
    );
    if summary.materials.is_empty() {
        html.push_str("<tr><td colspan=\"6\">No material payments recorded</td></tr>\n");
    }
    for material in &summary.materials {
        let _ = writeln!(
            html,
            r#"<tr><td>{date}</td><td>{detail}</td><td>{provider}</td><td>{quantity}</td><td>{rate}</td><td class="amount">{total}</td></tr>"#,
            date = display_date(&material.date),
            detail = escape(&material.material_detail),
            provider = escape(&material.material_provider),
            quantity = material
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string()),
            rate = material.rate.map(format_pkr).unwrap_or_else(|| "-".to_string()),
            total = format_pkr(material.total_amount),
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{
        contract::CompanyRefDto, enums::LedgerType, material::MaterialPaymentDto,
        summary::LedgerPaymentDto,
    };

    fn meta() -> PrintMeta {
        PrintMeta::at(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn summary() -> ProjectPaymentSummary {
        ProjectPaymentSummary {
            project_id: "p1".to_string(),
            project_name: "DHA Plaza".to_string(),
            project_type: "withMaterial".to_string(),
            project_cost: 1_000_000.0,
            total_payment_received: 400_000.0,
            net: -50_000.0,
            payments: vec![
                LedgerPaymentDto {
                    id: "l1".to_string(),
                    contractor: Some(CompanyRefDto {
                        id: "k1".to_string(),
                        company_name: "Khan Builders".to_string(),
                    }),
                    kind: LedgerType::Debit,
                    date: "2024-05-03".to_string(),
                    amount: 120_000.0,
                    payment_method: "cash".to_string(),
                    status: "paid".to_string(),
                    ..Default::default()
                },
                LedgerPaymentDto {
                    id: "l2".to_string(),
                    kind: LedgerType::Credit,
                    date: "2024-05-04".to_string(),
                    amount: 400_000.0,
                    payment_method: "bank_transfer".to_string(),
                    status: "verified".to_string(),
                    ..Default::default()
                },
            ],
            materials: vec![MaterialPaymentDto {
                id: "m1".to_string(),
                material_detail: "Cement <OPC>".to_string(),
                material_provider: "Lucky".to_string(),
                quantity: Some(100.0),
                rate: Some(1_250.0),
                total_amount: 125_000.0,
                date: "2024-05-10".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn contractor_payments_report() {
        let html = render_project_report(&summary(), ProjectReportKind::ContractorPayments, &meta());

        assert!(html.contains("<title>DHA Plaza - Contractor Payments</title>"));
        assert!(html.contains("<h2>DHA Plaza - Contractor Payments Report</h2>"));
        assert!(html.contains("Generated on 01 Jun 2024"));
        assert!(html.contains("PKR 1,000,000.00"));
        assert!(html.contains("-PKR 50,000.00"));
        assert!(html.contains("<td>Khan Builders</td>"));
        assert!(html.contains(">CREDIT<"));
        assert!(!html.contains("Material Detail"));
    }

    #[test]
    fn material_payments_report() {
        let html = render_project_report(&summary(), ProjectReportKind::MaterialPayments, &meta());

        assert!(html.contains("DHA Plaza - Material Payments Report"));
        assert!(html.contains("<td>Cement &lt;OPC&gt;</td>"));
        assert!(html.contains("<td>100</td>"));
        assert!(html.contains("PKR 1,250.00"));
        assert!(html.contains("PKR 125,000.00"));
        assert!(!html.contains("<th>Contractor</th>"));
    }

    #[test]
    fn empty_ledgers_render_a_placeholder_row() {
        let empty = ProjectPaymentSummary {
            project_name: "Empty".to_string(),
            ..Default::default()
        };
        let payments = render_project_report(&empty, ProjectReportKind::ContractorPayments, &meta());
        let materials = render_project_report(&empty, ProjectReportKind::MaterialPayments, &meta());
        assert!(payments.contains("No payments recorded"));
        assert!(materials.contains("No material payments recorded"));
    }
}
