//! Administrative console for a construction business.
//!
//! Staff use it to record clients, contractors, projects, project contracts and the three kinds of
//! payments, and to review per-contract and per-project payment summaries. The pure pieces
//! (validation, derived totals, list transforms, report rendering) live in plain modules so they
//! can be tested without a browser; [`client`] is the Dioxus UI built on top of them.

pub mod api;
pub mod calc;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod listing;
pub mod model;
pub mod picker;
pub mod report;
pub mod session;

pub use error::Error;
