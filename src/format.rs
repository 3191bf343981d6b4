//! Display formatting shared by the screens and the printable reports.

use chrono::{DateTime, NaiveDate};

/// Formats an amount as Pakistani rupees with two decimals and thousands separators.
///
/// `1500.5` becomes `PKR 1,500.50`; negative amounts are prefixed with `-`.
pub fn format_pkr(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }

    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let fraction = (cents % 100.0) as u64;

    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{sign}PKR {}.{fraction:02}", group_thousands(whole))
}

/// [`format_pkr`] over a raw input string; returns an empty string when it does not parse.
pub fn format_pkr_str(amount: &str) -> String {
    crate::form::parse_number(amount)
        .map(format_pkr)
        .unwrap_or_default()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses the date part of a backend timestamp (`2024-05-01` or a full RFC 3339 string).
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Renders a backend date as `01 May 2024`, or `-` when absent or unparsable.
pub fn display_date(raw: &str) -> String {
    parse_wire_date(raw)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Badge classes for a project status.
pub fn project_status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" => "badge badge-success",
        "ongoing" => "badge badge-info",
        "planning" => "badge badge-warning badge-outline",
        "on_hold" => "badge badge-warning",
        "cancelled" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

/// Badge classes for a payment status.
pub fn payment_status_class(status: &str) -> &'static str {
    match status {
        "paid" => "badge badge-success",
        "verified" => "badge badge-info",
        "pending" => "badge badge-warning",
        "disputed" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

/// Text colour for a ledger direction: credits green, anything else red.
pub fn ledger_class(kind: &str) -> &'static str {
    if kind == "credit" {
        "text-success"
    } else {
        "text-error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_pkr() {
        assert_eq!(format_pkr_str("1500.50"), "PKR 1,500.50");
        assert_eq!(format_pkr(0.0), "PKR 0.00");
        assert_eq!(format_pkr(999.999), "PKR 1,000.00");
        assert_eq!(format_pkr(1234567.8), "PKR 1,234,567.80");
        assert_eq!(format_pkr(-2500.0), "-PKR 2,500.00");
    }

    #[test]
    fn unparsable_amount_formats_empty() {
        assert_eq!(format_pkr_str(""), "");
        assert_eq!(format_pkr_str("abc"), "");
        assert_eq!(format_pkr(f64::NAN), "");
    }

    #[test]
    fn parses_wire_dates() {
        let may_first = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_wire_date("2024-05-01"), may_first);
        assert_eq!(parse_wire_date("2024-05-01T00:00:00.000Z"), may_first);
        assert_eq!(parse_wire_date(""), None);
        assert_eq!(display_date("2024-05-01T10:30:00.000Z"), "01 May 2024");
        assert_eq!(display_date("soon"), "-");
    }

    #[test]
    fn status_classes() {
        assert_eq!(project_status_class("ON_HOLD"), "badge badge-warning");
        assert_eq!(payment_status_class("rejected"), "badge badge-ghost");
        assert_eq!(ledger_class("debit"), "text-error");
    }
}
