//! Typed client for the backend REST API.
//!
//! Every entity gets its own module adding methods to [`ApiClient`]. Methods return
//! [`Error::Request`] with a fixed, user-facing message; the underlying [`ApiError`] is logged
//! before being wrapped.

pub mod auth;
pub mod client;
pub mod contract;
pub mod contractor;
pub mod material;
pub mod payment;
pub mod project;
pub mod project_payment;
pub mod summary;
pub mod transport;
pub mod user;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

pub use transport::{ApiRequest, ApiResponse, DefaultTransport, Method, Transport};

use crate::{
    config::Config,
    error::{ApiError, Error},
    model::api::ErrorDto,
    session::Session,
};

/// Message shown when one of several concurrent initial loads fails.
pub const LOAD_DATA_FAILED: &str = "Failed to load data. Please refresh the page.";

#[derive(Clone, Debug)]
pub struct ApiClient<T = DefaultTransport> {
    base_url: String,
    session: Option<Session>,
    transport: T,
}

impl ApiClient<DefaultTransport> {
    /// Client for the configured backend, authenticated as `session` when present
    pub fn new(config: &Config, session: Option<Session>) -> Self {
        Self::with_transport(config.api_url.clone(), session, DefaultTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, session: Option<Session>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            transport,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn require_session(&self) -> Result<&Session, ApiError> {
        self.session.as_ref().ok_or(ApiError::NotAuthenticated)
    }

    /// Sends a request and turns a non-success status into [`ApiError::Status`].
    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            body,
            authorization: self.session.as_ref().map(Session::bearer),
        };

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<ErrorDto>(&response.body)
            .ok()
            .and_then(ErrorDto::into_message)
            .unwrap_or_else(|| response.body.trim().to_string());

        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(body)?;
        self.send(Method::Post, path, Some(body)).await
    }
}

/// Logs `err` and wraps it with the message shown to the user.
fn request_failed(message: &'static str) -> impl FnOnce(ApiError) -> Error {
    move |err| {
        tracing::error!("{}: {}", message, err);
        Error::request(message, err)
    }
}

/// Relabels any request failure of a combined load as [`LOAD_DATA_FAILED`].
///
/// The original failure has already been logged by the individual call.
pub fn load_failed(err: Error) -> Error {
    match err {
        Error::Request { source, .. } => Error::request(LOAD_DATA_FAILED, source),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::session::SessionUser;

    /// Records every request and answers with a canned response
    #[derive(Clone, Default)]
    pub(crate) struct StubTransport {
        pub requests: Arc<Mutex<Vec<ApiRequest>>>,
        pub response: Option<(u16, String)>,
    }

    impl StubTransport {
        pub fn answering(status: u16, body: &str) -> Self {
            Self {
                requests: Arc::default(),
                response: Some((status, body.to_string())),
            }
        }

        pub fn last(&self) -> ApiRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for StubTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            match &self.response {
                Some((status, body)) => Ok(ApiResponse {
                    status: *status,
                    body: body.clone(),
                }),
                None => Err(ApiError::Transport("connection refused".to_string())),
            }
        }
    }

    pub(crate) fn session() -> Session {
        Session {
            token: "t0k3n".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                user_name: "amir".to_string(),
                email: "amir@urban.pk".to_string(),
            },
        }
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        futures::executor::block_on(future)
    }

    #[test]
    fn attaches_bearer_and_joins_base_url() {
        let stub = StubTransport::answering(200, r#"{"data":[]}"#);
        let api = ApiClient::with_transport("http://api.test/", Some(session()), stub.clone());

        let users = block_on(api.list_users()).unwrap();

        assert!(users.is_empty());
        let request = stub.last();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://api.test/api/user/get-all-users");
        assert_eq!(request.authorization.as_deref(), Some("Bearer t0k3n"));
    }

    #[test]
    fn anonymous_requests_carry_no_authorization() {
        let stub = StubTransport::answering(200, r#"{"data":[]}"#);
        let api = ApiClient::with_transport("http://api.test", None, stub.clone());

        block_on(api.list_projects()).unwrap();

        assert_eq!(stub.last().authorization, None);
    }

    #[test]
    fn status_failure_keeps_backend_message_in_source_only() {
        let stub = StubTransport::answering(500, r#"{"message":"db down"}"#);
        let api = ApiClient::with_transport("http://api.test", None, stub);

        let err = block_on(api.list_clients()).unwrap_err();

        assert_eq!(err.to_string(), "Failed to load clients");
        match err {
            Error::Request {
                source: ApiError::Status { status, message },
                ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "db down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn plain_text_error_body_is_kept() {
        let stub = StubTransport::answering(502, "Bad Gateway\n");
        let api = ApiClient::with_transport("http://api.test", None, stub);

        let err = block_on(api.list_contractors()).unwrap_err();

        assert!(matches!(
            err,
            Error::Request { source: ApiError::Status { ref message, .. }, .. } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn transport_failure_maps_to_generic_message() {
        let api = ApiClient::with_transport("http://api.test", None, StubTransport::default());

        let err = block_on(api.list_contracts()).unwrap_err();

        assert_eq!(err.to_string(), "Failed to load project contracts");
    }

    #[test]
    fn load_failed_relabels_request_errors_only() {
        let err = load_failed(Error::request(
            "Failed to load projects",
            ApiError::Transport("x".to_string()),
        ));
        assert_eq!(err.to_string(), LOAD_DATA_FAILED);

        let err = load_failed(Error::Auth("Login failed".to_string()));
        assert_eq!(err.to_string(), "Login failed");
    }
}
