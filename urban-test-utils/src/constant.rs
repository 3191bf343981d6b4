//! Identity of the signed-in test user.
//!
//! Mocked authenticated routes only match requests carrying [`TEST_BEARER`].

pub static TEST_USER_ID: &str = "665f1c2e9b1d4a0012345678";

pub static TEST_USER_NAME: &str = "admin";

pub static TEST_EMAIL: &str = "admin@urban.pk";

pub static TEST_PASSWORD: &str = "secret123";

pub static TEST_TOKEN: &str = "test-token";

/// `Authorization` header value for [`TEST_TOKEN`]
pub static TEST_BEARER: &str = "Bearer test-token";
