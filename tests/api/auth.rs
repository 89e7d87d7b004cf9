use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestApp;

#[tokio::test]
/// Expect repeated sign-ins to return the same token until sign-out
async fn sign_in_reuses_token_until_sign_out() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    app.test
        .account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;
    let credentials = json!({ "email": "admin@example.com", "password": "secret" });

    let (status, first) = app
        .send(Method::POST, "/v1/signin", Some(credentials.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = first["token"].as_str().unwrap_or_default().to_string();
    assert_eq!(token.len(), 64);

    let (_, second) = app
        .send(Method::POST, "/v1/signin", Some(credentials.clone()))
        .await;
    assert_eq!(second["token"], token.as_str());

    let (status, body) = app
        .send(Method::POST, "/v1/signout", Some(credentials.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);

    let (_, third) = app.send(Method::POST, "/v1/signin", Some(credentials)).await;
    assert_ne!(third["token"], token.as_str());

    Ok(())
}

#[tokio::test]
/// Expect unknown email and wrong password to be indistinguishable
async fn bad_credentials_share_response() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    app.test
        .account()
        .insert_mock_account("admin@example.com", "secret")
        .await?;

    let unknown = app
        .send(
            Method::POST,
            "/v1/signin",
            Some(json!({ "email": "nobody@example.com", "password": "secret" })),
        )
        .await;
    let wrong = app
        .send(
            Method::POST,
            "/v1/signin",
            Some(json!({ "email": "admin@example.com", "password": "guess" })),
        )
        .await;

    assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, wrong);
    assert_eq!(wrong.1["message"], "invalid email or password");

    let (status, _) = app
        .send(
            Method::POST,
            "/v1/signout",
            Some(json!({ "email": "admin@example.com", "password": "guess" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 400 when either credential is empty
async fn rejects_missing_credentials() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app
        .send(Method::POST, "/v1/signin", Some(json!({ "email": "admin@example.com" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "missing email or password");

    Ok(())
}
