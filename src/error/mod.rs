//! Error types for the console.
//!
//! Failures fall into four groups that the UI treats differently:
//! - validation failures carry a per-field [`FieldErrors`] map and are rendered inline
//! - request failures carry a fixed user-facing message; the underlying [`ApiError`] is logged
//!   but never shown
//! - login and registration failures show the backend's own message
//! - configuration failures stop the app before any screen renders

pub mod api;
pub mod config;

use thiserror::Error;

pub use api::ApiError;
pub use config::ConfigError;

use crate::form::FieldErrors;

/// Main error type surfaced to the UI.
#[derive(Error, Debug)]
pub enum Error {
    /// A backend call failed.
    ///
    /// `Display` renders only `message` so transport detail never reaches a toast.
    #[error("{message}")]
    Request {
        message: &'static str,
        #[source]
        source: ApiError,
    },
    /// Login or registration was refused; carries the backend's explanation.
    #[error("{0}")]
    Auth(String),
    /// Missing or malformed configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The draft did not pass validation.
    #[error("Please fix the errors below before submitting.")]
    Validation(FieldErrors),
}

impl Error {
    /// Wraps a backend failure with the message shown to the user.
    ///
    /// # Arguments
    /// - `message` - Generic, user-facing description of the failed operation
    /// - `source` - The underlying failure, kept for logs
    pub fn request(message: &'static str, source: ApiError) -> Self {
        Self::Request { message, source }
    }

    /// Per-field errors, when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
