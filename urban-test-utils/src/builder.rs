//! Declarative setup of the mock backend.
//!
//! Endpoints are queued on the builder and created in `build()`, after the mock server has
//! started. Custom endpoints are created first so tests can stack several mocks on one path.

use mockito::Mock;
use serde_json::Value;

use crate::{fixtures::factory, TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for a mock backend.
///
/// # Example
///
/// ```no_run
/// use urban_test_utils::{fixtures::factory, TestBuilder};
///
/// # async fn example() -> Result<(), urban_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_list("/api/project/get-all-projects", vec![factory::project("p1", "Villa 12", "V-12")])
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,

    login: Option<(Value, usize)>,
    // (path, items, expected_requests)
    lists: Vec<(String, Vec<Value>, usize)>,
    // (path, body, expected_requests)
    documents: Vec<(String, Value, usize)>,
    // (path, partial body, expected_requests)
    creates: Vec<(String, Value, usize)>,
    // (method, path, status, message)
    failures: Vec<(String, String, usize, String)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            login: None,
            lists: Vec::new(),
            documents: Vec::new(),
            creates: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Answer `POST /api/auth/login` with the test user's session once.
    pub fn with_login(mut self) -> Self {
        self.login = Some((factory::login_response(), 1));
        self
    }

    /// Answer an authorized `GET path` with `{ "data": items }` once.
    pub fn with_list(mut self, path: &str, items: Vec<Value>) -> Self {
        self.lists.push((path.to_string(), items, 1));
        self
    }

    /// Answer an authorized `GET path` with `body` verbatim once.
    ///
    /// Used by the summary routes, whose bodies are not wrapped in `data`.
    pub fn with_document(mut self, path: &str, body: Value) -> Self {
        self.documents.push((path.to_string(), body, 1));
        self
    }

    /// Accept one authorized `POST path` whose JSON body contains `partial`.
    pub fn with_create(mut self, path: &str, partial: Value) -> Self {
        self.creates.push((path.to_string(), partial, 1));
        self
    }

    /// Answer `method path` with `status` and `{ "message": message }`.
    pub fn with_failure(mut self, method: &str, path: &str, status: usize, message: &str) -> Self {
        self.failures
            .push((method.to_string(), path.to_string(), status, message.to_string()));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// # Arguments
    /// - `builder` - Closure creating the mock on the started server
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Start the mock server and create every queued endpoint.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (method, path, status, message) in self.failures {
            mocks.push(setup.backend().create_endpoint(
                &method,
                &path,
                status,
                &factory::error_message(&message),
                1,
            ));
        }

        if let Some((body, expected)) = self.login {
            mocks.push(
                setup
                    .backend()
                    .create_endpoint("POST", "/api/auth/login", 200, &body, expected),
            );
        }

        for (path, items, expected) in self.lists {
            let body = factory::data(items);
            mocks.push(
                setup
                    .backend()
                    .create_authorized_endpoint("GET", &path, 200, &body, expected),
            );
        }

        for (path, body, expected) in self.documents {
            mocks.push(
                setup
                    .backend()
                    .create_authorized_endpoint("GET", &path, 200, &body, expected),
            );
        }

        for (path, partial, expected) in self.creates {
            mocks.push(setup.backend().create_post_endpoint(&path, partial, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_without_endpoints() {
        let result = TestBuilder::new().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn chains_endpoints() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login()
            .with_list("/api/user/get-all-users", vec![factory::user("u1", "sara", "2024-01-01")])
            .with_failure("GET", "/api/client/get-all-clients", 500, "boom")
            .build()
            .await?;

        assert_eq!(test.mocks.len(), 3);
        assert!(test.url().starts_with("http://"));
        Ok(())
    }
}
