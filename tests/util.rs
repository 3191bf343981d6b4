//! Shared helpers for driving the API client against the mock backend.

use chrono::NaiveDate;
use urban_console::{
    api::{transport::ReqwestTransport, ApiClient},
    session::{Session, SessionUser},
};
use urban_test_utils::prelude::*;

/// Session of the signed-in test user
pub fn test_session() -> Session {
    Session {
        token: TEST_TOKEN.to_string(),
        user: SessionUser {
            id: TEST_USER_ID.to_string(),
            user_name: TEST_USER_NAME.to_string(),
            email: TEST_EMAIL.to_string(),
        },
    }
}

/// Client pointed at the mock backend, signed in as the test user
pub fn signed_in(test: &TestSetup) -> ApiClient<ReqwestTransport> {
    ApiClient::with_transport(test.url(), Some(test_session()), ReqwestTransport::default())
}

/// Client pointed at the mock backend without a session
pub fn anonymous(test: &TestSetup) -> ApiClient<ReqwestTransport> {
    ApiClient::with_transport(test.url(), None, ReqwestTransport::default())
}

/// Fixed "today" for form validation
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

pub fn client_error(err: urban_console::Error) -> TestError {
    TestError::Client(err.to_string())
}
