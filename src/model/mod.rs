//! Wire types exchanged with the backend.
//!
//! Response DTOs are lenient: every field the backend may omit carries a serde default so a
//! partially populated record still renders. Request bodies (`New*`) are the validated form
//! representations and can only be produced by the `form` module.

pub mod api;
pub mod client;
pub mod contract;
pub mod contractor;
pub mod enums;
pub mod material;
pub mod payment;
pub mod project;
pub mod project_payment;
pub mod summary;
pub mod user;
