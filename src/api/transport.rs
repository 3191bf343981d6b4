//! The HTTP seam under [`ApiClient`](super::ApiClient).
//!
//! Browser builds send requests through `reqwasm` (the Fetch API); native builds and tests use
//! `reqwest`. Both return the raw status and body; interpretation happens in the client.

use std::future::Future;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved request
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
    /// Value of the `Authorization` header, when a session exists
    pub authorization: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back whatever the server answered.
///
/// Implementations only fail when no response was received at all; a non-success status is
/// still `Ok`.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

/// Fetch-based transport used in the browser
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwasmTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use reqwasm::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .header("Content-Type", "application/json");

        if let Some(authorization) = request.authorization.as_deref() {
            builder = builder.header("Authorization", authorization);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// `reqwest` transport for native targets
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(authorization) = request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
