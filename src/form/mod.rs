//! Form drafts and their validation.
//!
//! Every form keeps a string-typed draft that mirrors its inputs one to one. Submitting runs
//! [`Draft::validate`], which either produces the typed request body the API expects or a sparse
//! [`FieldErrors`] map keyed by the backend's field names. Validation never performs I/O; the
//! current date is passed in so date rules are deterministic.

pub mod auth;
pub mod client;
pub mod contract;
pub mod contractor;
pub mod material;
pub mod payment;
pub mod project;
pub mod project_payment;
pub mod repeatable;

use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use url::Url;

pub use repeatable::Repeatable;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-()\s]{7,}$").expect("phone pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

/// Date format used by `<input type="date">` and by the backend
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sparse map from field name to the message shown beside that field.
///
/// An empty map means the draft is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing an earlier message for the same field
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Removes the message for `field`; called when the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(())` when empty, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// A string-typed form draft that converts into a typed request body.
pub trait Draft: Clone + Default + PartialEq {
    /// The validated representation sent to the backend
    type Valid;

    /// Checks every rule of the form and converts the draft.
    ///
    /// # Arguments
    /// - `today` - The current local date, used by "not in the past/future" rules
    ///
    /// # Returns
    /// - `Ok(Self::Valid)` - Every rule passed
    /// - `Err(FieldErrors)` - One message per failing field
    fn validate(&self, today: NaiveDate) -> Result<Self::Valid, FieldErrors>;

    /// Only the error map, for re-rendering without submitting
    fn errors(&self, today: NaiveDate) -> FieldErrors {
        self.validate(today).err().unwrap_or_default()
    }
}

/// Parses a finite decimal number, ignoring surrounding whitespace.
///
/// Unlike browser number coercion, trailing garbage (`"12abc"`) is rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parses a closed-set value by its wire string.
pub fn parse_choice<T: FromStr>(raw: &str) -> Option<T> {
    T::from_str(raw.trim()).ok()
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Whether `raw` parses as an absolute URL.
pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok()
}

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// `None` for blank input, the trimmed text otherwise
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Checks a required field that must hold a positive number.
///
/// Records `required` when blank and `invalid` when the value is not a number above zero.
pub(crate) fn require_positive(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    required: &str,
    invalid: &str,
) -> Option<f64> {
    if is_blank(raw) {
        errors.set(field, required);
        return None;
    }
    let value = parse_number(raw).filter(|v| *v > 0.0);
    if value.is_none() {
        errors.set(field, invalid);
    }
    value
}

/// Checks an optional field that, when filled, must hold a positive number.
///
/// Blank input yields `Ok(None)`; an invalid value records `invalid` and yields `Err(())`.
pub(crate) fn optional_positive(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    invalid: &str,
) -> Result<Option<f64>, ()> {
    if is_blank(raw) {
        return Ok(None);
    }
    match parse_number(raw).filter(|v| *v > 0.0) {
        Some(value) => Ok(Some(value)),
        None => {
            errors.set(field, invalid);
            Err(())
        }
    }
}

/// Checks a required selection against its closed value set.
pub(crate) fn require_choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    required: &str,
) -> Option<T> {
    if is_blank(raw) {
        errors.set(field, required);
        return None;
    }
    let value = parse_choice(raw);
    if value.is_none() {
        errors.set(field, format!("Unknown value \"{}\"", raw.trim()));
    }
    value
}

/// Checks a required text field, returning the trimmed value
pub(crate) fn require_text(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    required: &str,
) -> Option<String> {
    let value = optional_text(raw);
    if value.is_none() {
        errors.set(field, required);
    }
    value
}

/// Checks a required payment date that may not lie after `today`.
pub(crate) fn require_past_date(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if is_blank(raw) {
        errors.set(field, "Payment date is required");
        return None;
    }
    match parse_date(raw) {
        Some(date) if date > today => {
            errors.set(field, "Payment date cannot be in the future");
            None
        }
        Some(date) => Some(date),
        None => {
            errors.set(field, "Please enter a valid date");
            None
        }
    }
}

/// Checks the transaction id that every non-cash payment method needs.
pub(crate) fn check_transaction_id(
    errors: &mut FieldErrors,
    method: Option<crate::model::enums::PaymentMethod>,
    raw: &str,
) -> Option<String> {
    let value = optional_text(raw);
    if value.is_none() && method.is_some_and(|m| m.requires_transaction_id()) {
        errors.set(
            "transactionId",
            "Transaction ID is required for non-cash payments",
        );
    }
    value
}

/// Checks an optional receipt link.
pub(crate) fn check_receipt_url(errors: &mut FieldErrors, raw: &str) -> Option<String> {
    let value = optional_text(raw);
    if value.as_deref().is_some_and(|url| !is_valid_url(url)) {
        errors.set("receiptPhoto", "Please enter a valid URL for receipt photo");
    }
    value
}
