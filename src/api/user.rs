use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{api::DataEnvelope, user::UserDto},
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// `GET /api/user/get-all-users`
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        self.get_json::<DataEnvelope<UserDto>>("/api/user/get-all-users")
            .await
            .map(|envelope| envelope.data)
            .map_err(request_failed("Failed to load users"))
    }
}
