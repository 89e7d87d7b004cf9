use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestApp;

#[tokio::test]
/// Expect account responses to never include the password
async fn hides_password() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, _) = app
        .send(
            Method::POST,
            "/v1/account",
            Some(json!({ "name": "Admin", "email": "admin@example.com", "password": "secret" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = app
        .send(Method::GET, "/v1/account?email=admin@example.com", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["accounts"][0]["email"], "admin@example.com");
    assert!(list["accounts"][0].get("password").is_none());

    Ok(())
}

#[tokio::test]
/// Expect an update to replace the stored credentials
async fn update_replaces_credentials() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let account = app
        .test
        .account()
        .insert_mock_account("old@example.com", "old")
        .await?;

    let (status, updated) = app
        .send(
            Method::PUT,
            "/v1/account",
            Some(json!({
                "id": account.id,
                "name": "Renamed",
                "email": "new@example.com",
                "password": "new"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["account"]["email"], "new@example.com");

    let (status, _) = app
        .send(
            Method::POST,
            "/v1/signin",
            Some(json!({ "email": "new@example.com", "password": "new" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect deleting an unknown account to be rejected
async fn delete_unknown_account() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app
        .send(Method::DELETE, "/v1/account", Some(json!({ "id": "missing" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "wrong uuid provided");

    Ok(())
}
