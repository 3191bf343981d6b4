use std::fmt::Write;

use crate::{
    format::{display_date, format_pkr},
    model::{enums::Choice, summary::ContractPaymentSummary},
    report::{escape, ledger_css, net_css, or_dash, PrintMeta, COMPANY_ADDRESS, COMPANY_NAME, COMPANY_PHONES},
};

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; line-height: 1.4; }
.header { display: flex; align-items: center; margin-bottom: 30px; border-bottom: 2px solid #ddd; padding-bottom: 20px; }
.company-info { flex: 1; }
.company-name { font-size: 24px; font-weight: bold; color: #2563eb; margin-bottom: 5px; }
.receipt-info { text-align: right; font-size: 14px; }
.summary-section { background: #f8f9fa; padding: 20px; margin-bottom: 30px; border-radius: 8px; border: 1px solid #e9ecef; }
.summary-title, .payments-title { font-size: 18px; font-weight: bold; margin-bottom: 15px; color: #333; }
.summary-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; }
.summary-item { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #dee2e6; }
.summary-label { font-weight: 600; color: #495057; }
.summary-value { font-weight: bold; color: #212529; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { border: 1px solid #dee2e6; padding: 12px 8px; text-align: left; font-size: 12px; }
th { background-color: #f8f9fa; font-weight: bold; color: #495057; }
.amount-cell { text-align: right; font-weight: bold; }
.credit { color: #28a745; }
.debit { color: #dc3545; }
.total-summary { background: #e3f2fd; padding: 15px; border-radius: 8px; margin-top: 20px; border: 1px solid #bbdefb; }
.total-row { display: flex; justify-content: space-between; margin-bottom: 8px; font-weight: bold; }
.net-amount { font-size: 16px; padding-top: 8px; border-top: 1px solid #90caf9; }
.footer { margin-top: 40px; padding-top: 20px; border-top: 2px solid #ddd; display: flex; justify-content: space-between; font-size: 12px; color: #666; }
.contact-info { text-align: right; }
@media print { body { margin: 0; } }
"#;

/// Renders the payment receipt of one project contract.
///
/// # Arguments
/// - `summary` - The contract summary as fetched
/// - `meta` - Print time and receipt number
///
/// # Returns
/// A complete HTML document with the company header, the contract block, one row per payment,
/// the totals and the company footer.
pub fn render_contract_receipt(summary: &ContractPaymentSummary, meta: &PrintMeta) -> String {
    let mut html = String::with_capacity(4096 + summary.payments.len() * 512);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Contract Payment Summary - {contractor}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="header">
  <div class="company-info">
    <div class="company-name">{company}</div>
    <div style="color: #666; font-size: 14px;">Contract Payment Summary</div>
  </div>
  <div class="receipt-info">
    <div><strong>Receipt No:</strong> {receipt}</div>
    <div><strong>Date:</strong> {date}</div>
    <div><strong>Time:</strong> {time}</div>
  </div>
</div>
"#,
        contractor = escape(&summary.contractor_name),
        company = escape(COMPANY_NAME),
        receipt = escape(&meta.receipt_no),
        date = meta.date(),
        time = meta.time(),
    );

    let _ = write!(
        html,
        r#"<div class="summary-section">
  <div class="summary-title">Contract Information</div>
  <div class="summary-grid">
    <div class="summary-item"><span class="summary-label">Project Name:</span><span class="summary-value">{project}</span></div>
    <div class="summary-item"><span class="summary-label">Contractor:</span><span class="summary-value">{contractor}</span></div>
    <div class="summary-item"><span class="summary-label">Contract Type:</span><span class="summary-value">{kind}</span></div>
    <div class="summary-item"><span class="summary-label">Contract Amount:</span><span class="summary-value">{amount}</span></div>
  </div>
</div>
"#,
        project = escape(&summary.project_name),
        contractor = escape(&summary.contractor_name),
        kind = escape(&summary.contract_type),
        amount = format_pkr(summary.total_amount),
    );

    html.push_str(
        r#"<div class="payments-section">
  <div class="payments-title">Payment Details</div>
  <table>
    <thead>
      <tr><th>Date</th><th>Type</th><th>Amount</th><th>Method</th><th>Status</th><th>Transaction ID</th><th>Description</th><th>Created By</th></tr>
    </thead>
    <tbody>
"#,
    );
    for payment in &summary.payments {
        let kind = payment.kind.value();
        let _ = writeln!(
            html,
            r#"      <tr><td>{date}</td><td class="{css}">{kind_upper}</td><td class="amount-cell {css}">{amount}</td><td>{method}</td><td>{status}</td><td>{txn}</td><td>{work}</td><td>{creator}</td></tr>"#,
            date = display_date(&payment.date),
            css = ledger_css(kind),
            kind_upper = kind.to_uppercase(),
            amount = format_pkr(payment.amount),
            method = escape(&payment.payment_method),
            status = escape(&payment.status),
            txn = or_dash(payment.transaction_id.as_deref(), "-"),
            work = or_dash(payment.work_description.as_deref(), "-"),
            creator = or_dash(payment.creator_name(), "N/A"),
        );
    }
    html.push_str("    </tbody>\n  </table>\n</div>\n");

    let _ = write!(
        html,
        r#"<div class="total-summary">
  <div class="total-row"><span>Contract Amount:</span><span>{amount}</span></div>
  <div class="total-row"><span>Total Payments:</span><span class="debit">{paid}</span></div>
  <div class="total-row net-amount {net_css}"><span>Net Amount:</span><span>{net}</span></div>
</div>
"#,
        amount = format_pkr(summary.total_amount),
        paid = format_pkr(summary.total_payments),
        net_css = net_css(summary.net),
        net = format_pkr(summary.net),
    );

    let _ = write!(
        html,
        r#"<div class="footer">
  <div>
    <div><strong>{company}</strong></div>
    <div>{address}</div>
  </div>
  <div class="contact-info">
    <div><strong>Contact Information</strong></div>
    <div>Phone: {phone_a}</div>
    <div>Phone: {phone_b}</div>
  </div>
</div>
</body>
</html>
"#,
        company = escape(COMPANY_NAME),
        address = escape(COMPANY_ADDRESS),
        phone_a = COMPANY_PHONES[0],
        phone_b = COMPANY_PHONES[1],
    );

    html
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{
        enums::LedgerType,
        summary::{CreatorRefDto, LedgerPaymentDto},
    };

    fn meta() -> PrintMeta {
        PrintMeta {
            printed_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            receipt_no: "UD-43200123".to_string(),
        }
    }

    fn summary() -> ContractPaymentSummary {
        ContractPaymentSummary {
            project_contract_id: "c1".to_string(),
            project_name: "Gulberg <Villa>".to_string(),
            contractor_name: "Khan & Sons".to_string(),
            contract_type: "fixed_price".to_string(),
            total_amount: 250_000.0,
            total_payments: 100_000.0,
            net: 150_000.0,
            payments: vec![
                LedgerPaymentDto {
                    id: "p1".to_string(),
                    kind: LedgerType::Debit,
                    date: "2024-05-02T00:00:00.000Z".to_string(),
                    amount: 60_000.0,
                    payment_method: "cash".to_string(),
                    status: "paid".to_string(),
                    created_by: Some(CreatorRefDto {
                        id: "u1".to_string(),
                        user_name: "amir".to_string(),
                    }),
                    ..Default::default()
                },
                LedgerPaymentDto {
                    id: "p2".to_string(),
                    kind: LedgerType::Debit,
                    date: "2024-05-20".to_string(),
                    amount: 40_000.0,
                    payment_method: "bank_transfer".to_string(),
                    transaction_id: Some("TRX-9".to_string()),
                    status: "verified".to_string(),
                    ..Default::default()
                },
            ],
            contract: None,
        }
    }

    #[test]
    fn renders_deterministically() {
        assert_eq!(
            render_contract_receipt(&summary(), &meta()),
            render_contract_receipt(&summary(), &meta())
        );
    }

    #[test]
    fn contains_header_rows_totals_and_footer() {
        let html = render_contract_receipt(&summary(), &meta());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Urban Design &amp; Construction"));
        assert!(html.contains("<strong>Receipt No:</strong> UD-43200123"));
        assert!(html.contains("<strong>Date:</strong> 01 Jun 2024"));
        assert!(html.contains("PKR 250,000.00"));
        assert!(html.contains("PKR 150,000.00"));
        assert!(html.contains("02 May 2024"));
        assert!(html.contains(">DEBIT<"));
        assert!(html.contains("<td>TRX-9</td>"));
        assert!(html.contains("<td>amir</td>"));
        assert!(html.contains("<td>N/A</td>"));
        assert!(html.contains("MR-11 C-1 Block B-17 Multi Gardens"));
        assert!(html.contains("Phone: 0315 5874112"));
        assert_eq!(html.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn escapes_backend_text() {
        let html = render_contract_receipt(&summary(), &meta());
        assert!(html.contains("Gulberg &lt;Villa&gt;"));
        assert!(html.contains("Khan &amp; Sons"));
        assert!(!html.contains("<Villa>"));
    }

    #[test]
    fn negative_net_is_marked_as_debit() {
        let over_paid = ContractPaymentSummary {
            net: -5_000.0,
            ..summary()
        };
        let html = render_contract_receipt(&over_paid, &meta());
        assert!(html.contains("net-amount debit"));
        assert!(html.contains("-PKR 5,000.00"));
    }
}
