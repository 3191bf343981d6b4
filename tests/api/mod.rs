//! Integration tests for the API client.
//!
//! Each test starts a mockito backend, drives the real `reqwest` transport against it and checks
//! both what the client decoded and what the backend received.

mod auth;
mod create;
mod list;
mod summary;

use urban_test_utils::prelude::*;

use crate::util::{anonymous, client_error, signed_in, today};
