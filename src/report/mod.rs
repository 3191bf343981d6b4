//! Printable HTML documents built from fetched payment summaries.
//!
//! Rendering is a pure function of the summary plus the moment of printing, so the same inputs
//! always give the same document. All interpolated text is HTML-escaped.

pub mod contract;
pub mod project;

use chrono::NaiveDateTime;

pub use contract::render_contract_receipt;
pub use project::{render_project_report, ProjectReportKind};

pub const COMPANY_NAME: &str = "Urban Design & Construction";
pub const COMPANY_ADDRESS: &str = "MR-11 C-1 Block B-17 Multi Gardens";
pub const COMPANY_PHONES: [&str; 2] = ["0333 3834040", "0315 5874112"];

/// When and under which number a document was printed
#[derive(Clone, Debug, PartialEq)]
pub struct PrintMeta {
    pub printed_at: NaiveDateTime,
    pub receipt_no: String,
}

impl PrintMeta {
    /// Metadata for a document printed at `printed_at`, numbered from the same instant
    pub fn at(printed_at: NaiveDateTime) -> Self {
        let millis = printed_at.and_utc().timestamp_millis();
        Self {
            printed_at,
            receipt_no: receipt_number(millis),
        }
    }

    /// Metadata for a document printed now, in local time
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            printed_at: now.naive_local(),
            receipt_no: receipt_number(now.timestamp_millis()),
        }
    }

    fn date(&self) -> String {
        self.printed_at.format("%d %b %Y").to_string()
    }

    fn time(&self) -> String {
        self.printed_at.format("%I:%M:%S %p").to_string()
    }
}

/// `UD-` followed by the last eight digits of the epoch-millisecond clock
pub fn receipt_number(epoch_millis: i64) -> String {
    let digits = epoch_millis.unsigned_abs().to_string();
    let tail = &digits[digits.len().saturating_sub(8)..];
    format!("UD-{tail}")
}

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escaped text, or `fallback` when the value is missing or blank
fn or_dash(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape(v),
        None => fallback.to_string(),
    }
}

/// CSS class for a ledger amount
fn ledger_css(kind: &str) -> &'static str {
    if kind == "credit" {
        "credit"
    } else {
        "debit"
    }
}

fn net_css(net: f64) -> &'static str {
    if net >= 0.0 {
        "credit"
    } else {
        "debit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn receipt_number_keeps_last_eight_digits() {
        assert_eq!(receipt_number(1_717_243_200_123), "UD-43200123");
        assert_eq!(receipt_number(42), "UD-42");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Khan" & Sons'</b>"#),
            "&lt;b&gt;&quot;Khan&quot; &amp; Sons&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn meta_formats_date_and_time() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let meta = PrintMeta::at(at);
        assert_eq!(meta.date(), "01 Jun 2024");
        assert_eq!(meta.time(), "02:05:09 PM");
        assert!(meta.receipt_no.starts_with("UD-"));
        assert_eq!(meta.receipt_no.len(), 11);
    }
}
