use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestApp;

#[tokio::test]
/// Expect a coach to be created and then deleted
async fn creates_and_deletes_coach() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, created) = app
        .send(
            Method::POST,
            "/v1/coach",
            Some(json!({
                "name": "Agus",
                "dob": "1980-02-14",
                "phone_number": "0815000000",
                "gender": "MALE",
                "email": "agus@example.com",
                "discipline": "Swimming",
                "register_date": "2019-06-30"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(Method::DELETE, "/v1/coach", Some(json!({ "id": created["id"] })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);

    Ok(())
}

#[tokio::test]
/// Expect coaches to have no list or update endpoints
async fn coach_has_no_list_or_update() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, _) = app.send(Method::GET, "/v1/coach", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = app
        .send(Method::PUT, "/v1/coach", Some(json!({ "id": "x" })))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
