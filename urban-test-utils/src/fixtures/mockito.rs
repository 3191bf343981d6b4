//! Mock endpoint creation for the backend routes.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_BEARER, fixtures::BackendFixtures};

impl<'a> BackendFixtures<'a> {
    /// Create an endpoint answering `status` with `body`.
    ///
    /// # Arguments
    /// - `method` - HTTP method, `"GET"` or `"POST"`
    /// - `path` - Route path including the `/api` prefix
    /// - `status` - Response status code
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times the endpoint must be called
    pub fn create_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an endpoint that only answers requests carrying the test bearer token.
    ///
    /// Requests without the header fall through to mockito's default 501 response.
    pub fn create_authorized_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_header("authorization", TEST_BEARER)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a POST endpoint that only matches when the JSON body includes `partial`.
    pub fn create_post_endpoint(&mut self, path: &str, partial: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", path)
            .match_header("authorization", TEST_BEARER)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(partial))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .expect(expected_requests)
            .create()
    }
}
