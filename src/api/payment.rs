use serde::Serialize;

use crate::{
    api::{request_failed, ApiClient, ApiResponse, Transport},
    error::ApiError,
    model::payment::{AttributedPayment, NewPayment},
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// Records a contractor payment on behalf of the signed-in user.
    pub async fn create_payment(&self, payment: &NewPayment) -> Result<(), Error> {
        self.post_attributed("/api/payment/create-payment", payment)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create payment. Please try again."))
    }

    /// Posts `payment` with `createdBy` set to the session user.
    ///
    /// Fails with [`ApiError::NotAuthenticated`] before sending when nobody is signed in.
    pub(crate) async fn post_attributed<B: Serialize>(&self, path: &str, payment: &B) -> Result<ApiResponse, ApiError> {
        let session = self.require_session()?;
        let body = AttributedPayment {
            payment,
            created_by: &session.user.id,
        };
        self.post_json(path, &body).await
    }
}
