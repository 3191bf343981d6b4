//! Mock backend for integration tests of the console's API client.
//!
//! [`TestBuilder`] queues endpoints and starts a mockito server in `build()`; the resulting
//! [`TestSetup`] exposes the server URL to hand to `ApiClient::with_transport` and keeps the mocks
//! alive so they can be asserted at the end of the test. JSON bodies come from
//! [`fixtures::factory`].

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, fixtures::factory, TestBuilder, TestError, TestSetup};
}
