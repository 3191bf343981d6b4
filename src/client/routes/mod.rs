pub mod auth;
pub mod clients;
pub mod contractors;
pub mod contracts;
pub mod dashboard;
pub mod not_found;
pub mod payments;
pub mod placeholder;
pub mod projects;
pub mod users;

pub use not_found::NotFound;
