//! Tests for the collection routes.

use urban_console::listing::{user_list_state, UserSortKey};

use super::*;

/// Clients decode with their populated user reference.
#[tokio::test]
async fn lists_clients() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list(
            "/api/client/get-all-clients",
            vec![factory::client("c1", "khan"), factory::client("c2", "malik")],
        )
        .build()
        .await?;

    let clients = signed_in(&test).list_clients().await.map_err(client_error)?;

    assert_eq!(clients.len(), 2);
    assert_eq!(
        clients[0].user.populated().map(|u| u.user_name.as_str()),
        Some("khan")
    );
    test.assert_mocks();

    Ok(())
}

/// A contractor whose user is sent as a bare id still decodes.
#[tokio::test]
async fn lists_contractors_with_unpopulated_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list(
            "/api/contractor/get-all-contractors",
            vec![factory::contractor("k1", "Shah Builders")],
        )
        .build()
        .await?;

    let contractors = signed_in(&test)
        .list_contractors()
        .await
        .map_err(client_error)?;

    assert_eq!(contractors[0].company_name, "Shah Builders");
    assert_eq!(contractors[0].owner_name(), None);
    test.assert_mocks();

    Ok(())
}

/// Projects keep the backend's `labouRate` spelling on the wire.
#[tokio::test]
async fn lists_projects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list(
            "/api/project/get-all-projects",
            vec![factory::project("p1", "Villa 12", "V-12")],
        )
        .build()
        .await?;

    let projects = signed_in(&test).list_projects().await.map_err(client_error)?;

    assert_eq!(projects[0].labour_rate, Some(250.0));
    assert_eq!(projects[0].option_label(), "Villa 12 (V-12)");
    test.assert_mocks();

    Ok(())
}

/// The user list opens newest first, whatever order the backend used.
#[tokio::test]
async fn user_list_opens_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list(
            "/api/user/get-all-users",
            vec![
                factory::user("u1", "amir", "2024-01-05T10:00:00.000Z"),
                factory::user("u2", "sara", "2024-03-01T10:00:00.000Z"),
                factory::user("u3", "bilal", "2024-02-11T10:00:00.000Z"),
            ],
        )
        .build()
        .await?;

    let users = signed_in(&test).list_users().await.map_err(client_error)?;
    let state = user_list_state();
    let page = state.apply(&users);

    let names: Vec<&str> = page.rows.iter().map(|u| u.user_name.as_str()).collect();
    assert_eq!(names, vec!["sara", "bilal", "amir"]);
    assert!(state.direction_of(UserSortKey::CreatedAt).is_some());
    test.assert_mocks();

    Ok(())
}

/// A failed list call shows only the fixed message.
#[tokio::test]
async fn failed_list_hides_backend_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failure("GET", "/api/project/get-all-projects", 500, "db timeout")
        .build()
        .await?;

    let err = signed_in(&test).list_projects().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load projects");
    test.assert_mocks();

    Ok(())
}

/// Without a session the bearer header is missing and the backend refuses the call.
#[tokio::test]
async fn anonymous_list_is_refused() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list("/api/user/get-all-users", vec![])
        .build()
        .await?;

    let err = anonymous(&test).list_users().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load users");

    Ok(())
}
