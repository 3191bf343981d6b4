use thiserror::Error;

/// Failure of a single backend request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, aborted fetch).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[from] serde_json::Error),
    /// The operation needs a signed-in user and no session exists.
    #[error("User not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Message the backend put in its error body, if this is a status failure
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
