use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Client(String),
}
