//! Fixtures for the mock backend.
//!
//! - `factory` - JSON bodies shaped like the backend's responses
//! - `mockito` - endpoint creation on the mock server

pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn backend<'a>(&'a mut self) -> BackendFixtures<'a> {
        BackendFixtures { setup: self }
    }
}

pub struct BackendFixtures<'a> {
    setup: &'a mut TestSetup,
}
