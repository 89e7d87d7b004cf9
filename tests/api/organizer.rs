use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestApp;

#[tokio::test]
/// Expect listed organizers to carry their club
async fn lists_organizer_with_club() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;

    let (status, created) = app
        .send(
            Method::POST,
            "/v1/organizer",
            Some(json!({
                "name": "Sari",
                "position": "Secretary",
                "club_id": club.id,
                "register_date": "2022-01-10",
                "phone_number": "0813000000",
                "email": "sari@example.com"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/v1/organizer?id={}", created["id"].as_str().unwrap_or_default());
    let (status, list) = app.send(Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    let organizer = &list["organizers"][0];
    assert_eq!(organizer["name"], "Sari");
    assert_eq!(organizer["active"], "UNKNOWN");
    assert_eq!(organizer["club"]["id"], club.id.as_str());
    assert_eq!(organizer["club"]["name"], "Garuda");

    Ok(())
}

#[tokio::test]
/// Expect an update to merge non-empty fields and keep the club
async fn update_merges_fields() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let (organizer, club) = app
        .test
        .organizer()
        .insert_mock_organizer_with_club("Sari")
        .await?;

    let (status, updated) = app
        .send(
            Method::PUT,
            "/v1/organizer",
            Some(json!({
                "id": organizer.id,
                "position": "Chairman",
                "club_id": "some-other-club"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["organizer"]["position"], "Chairman");
    assert_eq!(updated["organizer"]["name"], "Sari");
    assert_eq!(updated["organizer"]["club"]["id"], club.id.as_str());

    Ok(())
}

#[tokio::test]
/// Expect a missing register date to be reported
async fn rejects_missing_register_date() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;

    let (status, error) = app
        .send(
            Method::POST,
            "/v1/organizer",
            Some(json!({
                "name": "Sari",
                "position": "Secretary",
                "club_id": club.id,
                "phone_number": "0813000000"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Missing required fields: [register_date]");

    Ok(())
}

#[tokio::test]
/// Expect deleting an unknown organizer to be rejected
async fn delete_unknown_organizer() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app
        .send(Method::DELETE, "/v1/organizer", Some(json!({ "id": "missing" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "wrong uuid provided");

    Ok(())
}
