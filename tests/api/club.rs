use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use super::club_body;
use crate::util::TestApp;

#[tokio::test]
/// Expect a created club to be listed, updated and finally deleted
async fn club_lifecycle() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, created) = app
        .send(Method::POST, "/v1/club", Some(club_body("Garuda")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id should be a string").to_string();

    let (status, list) = app.send(Method::GET, "/v1/club", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["clubs"][0]["name"], "Garuda");
    assert_eq!(list["clubs"][0]["establish_date"], "2001-05-14");
    assert_eq!(list["clubs"][0]["active"], "TRUE");

    let (status, updated) = app
        .send(
            Method::PUT,
            "/v1/club",
            Some(json!({ "id": id, "name": "Garuda Muda", "active": "FALSE" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["club"]["name"], "Garuda Muda");
    assert_eq!(updated["club"]["active"], "FALSE");
    // Fields left empty keep their stored value
    assert_eq!(updated["club"]["country"], "Indonesia");

    let (status, deleted) = app
        .send(Method::DELETE, "/v1/club", Some(json!({ "id": id })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, serde_json::Value::Null);

    let (_, list) = app.send(Method::GET, "/v1/club", None).await;
    assert_eq!(list["total"], 0);

    Ok(())
}

#[tokio::test]
/// Expect the id query parameter to select a subset of clubs
async fn lists_clubs_by_id() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let first = app.test.club().insert_mock_club("First").await?;
    let second = app.test.club().insert_mock_club("Second").await?;
    app.test.club().insert_mock_club("Third").await?;

    let uri = format!("/v1/club?id={},{}", first.id, second.id);
    let (status, list) = app.send(Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 2);

    Ok(())
}

#[tokio::test]
/// Expect an impossible calendar date to be reported as a wrong format
async fn rejects_invalid_establish_date() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let mut body = club_body("Garuda");
    body["establish_date"] = json!("2024-02-30");

    let (status, error) = app.send(Method::POST, "/v1/club", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);
    assert_eq!(
        error["message"],
        "Wrong Format fields: [establish_date (format: yyyy-mm-dd)]"
    );

    Ok(())
}

#[tokio::test]
/// Expect missing fields to be listed in the error message
async fn rejects_missing_fields() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let mut body = club_body("");
    body["pic"] = json!("");

    let (status, error) = app.send(Method::POST, "/v1/club", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Missing required fields: [name,pic]");

    Ok(())
}

#[tokio::test]
/// Expect 400 when the body is not valid JSON
async fn rejects_malformed_body() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/v1/club")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .expect("request should build");
    let (status, error) = app.raw(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);

    Ok(())
}

#[tokio::test]
/// Expect updates and deletes of unknown clubs to be rejected
async fn rejects_unknown_id() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app
        .send(Method::PUT, "/v1/club", Some(json!({ "id": "missing", "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "wrong uuid provided");

    let (status, error) = app
        .send(Method::DELETE, "/v1/club", Some(json!({ "id": "" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "no uuid provided");

    Ok(())
}

#[tokio::test]
/// Expect an update with an unrecognized active value to be rejected
async fn rejects_invalid_active() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;

    let (status, error) = app
        .send(
            Method::PUT,
            "/v1/club",
            Some(json!({ "id": club.id, "active": "MAYBE" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["message"],
        "wrong value for active, should be FALSE or TRUE"
    );

    Ok(())
}

#[tokio::test]
/// Expect a query string that cannot be decoded to return the error envelope
async fn rejects_malformed_query() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app.send(Method::GET, "/v1/club?id=a&id=b", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);
    assert!(error["message"].as_str().is_some_and(|message| !message.is_empty()));

    Ok(())
}

#[tokio::test]
/// Expect a null field to be rejected as an undecodable body
async fn rejects_null_field() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let mut body = club_body("Garuda");
    body["logo"] = serde_json::Value::Null;

    let (status, error) = app.send(Method::POST, "/v1/club", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);

    let (_, list) = app.send(Method::GET, "/v1/club", None).await;
    assert_eq!(list["total"], 0);

    Ok(())
}

#[tokio::test]
/// Expect a second delete of the same club to be rejected without side effects
async fn delete_twice_leaves_no_club() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;
    let other = app.test.club().insert_mock_club("Elang").await?;

    let (status, _) = app
        .send(Method::DELETE, "/v1/club", Some(json!({ "id": club.id })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = app
        .send(Method::DELETE, "/v1/club", Some(json!({ "id": club.id })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "wrong uuid provided");

    let (_, list) = app
        .send(Method::GET, &format!("/v1/club?id={}", club.id), None)
        .await;
    assert_eq!(list["total"], 0);

    let (_, list) = app.send(Method::GET, "/v1/club", None).await;
    assert_eq!(list["total"], 1);
    assert_eq!(list["clubs"][0]["id"], other.id.as_str());

    Ok(())
}
