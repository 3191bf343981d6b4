use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, Transport},
    error::ApiError,
    model::user::{Credentials, NewUser},
    session::Session,
    Error,
};

/// Turns a refused login or registration into an error carrying the backend's reason.
fn refused(fallback: &'static str) -> impl FnOnce(ApiError) -> Error {
    move |err| {
        tracing::error!("{}: {}", fallback, err);
        let message = err.backend_message().unwrap_or(fallback).to_string();
        Error::Auth(message)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Exchanges credentials for a [`Session`].
    ///
    /// The returned session is not stored; the caller persists it and builds a new client with it.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        let response = self
            .post_json("/api/auth/login", credentials)
            .await
            .map_err(refused("Login failed"))?;
        let session = serde_json::from_str::<Session>(&response.body)
            .map_err(|e| refused("Login failed")(ApiError::Decode(e.to_string())))?;

        tracing::info!("Signed in as {}", session.user.user_name);
        Ok(session)
    }

    /// Creates an account, either by self sign-up or from the Add User screen.
    pub async fn register(&self, user: &NewUser) -> Result<(), Error> {
        self.post_json("/api/auth/register", user)
            .await
            .map(drop)
            .map_err(refused("Registration failed"))
    }
}
