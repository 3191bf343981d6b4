//! Tests for login and registration.

use urban_console::{
    form::{
        auth::{AddUserDraft, LoginDraft},
        Draft,
    },
    model::user::Credentials,
    Error,
};

use super::*;

fn credentials() -> Credentials {
    LoginDraft {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
    .validate(today())
    .expect("test credentials are valid")
}

/// Login decodes the token and profile into a session.
#[tokio::test]
async fn login_returns_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login().build().await?;

    let session = anonymous(&test)
        .login(&credentials())
        .await
        .map_err(client_error)?;

    assert_eq!(session.token, TEST_TOKEN);
    assert_eq!(session.user.id, TEST_USER_ID);
    assert_eq!(session.user.user_name, TEST_USER_NAME);
    assert_eq!(session.bearer(), TEST_BEARER);
    test.assert_mocks();

    Ok(())
}

/// A refused login surfaces the backend's own message.
#[tokio::test]
async fn login_shows_backend_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failure("POST", "/api/auth/login", 401, "Invalid credentials")
        .build()
        .await?;

    let result = anonymous(&test).login(&credentials()).await;

    assert!(matches!(result, Err(Error::Auth(ref m)) if m == "Invalid credentials"));
    test.assert_mocks();

    Ok(())
}

/// Adding a user sends the chosen role along with the account fields.
#[tokio::test]
async fn register_sends_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_create(
            "/api/auth/register",
            serde_json::json!({ "userName": "sara", "email": "sara@urban.pk", "role": "Admin" }),
        )
        .build()
        .await?;

    let user = AddUserDraft {
        user_name: "sara".to_string(),
        email: "sara@urban.pk".to_string(),
        password: "secret1".to_string(),
        role: "Admin".to_string(),
    }
    .validate(today())
    .map_err(|e| TestError::Client(format!("{e:?}")))?;

    signed_in(&test).register(&user).await.map_err(client_error)?;
    test.assert_mocks();

    Ok(())
}
