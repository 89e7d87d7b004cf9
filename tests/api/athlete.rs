use axum::http::{Method, StatusCode};
use roster_test_utils::prelude::*;
use serde_json::json;

use crate::util::TestApp;

#[tokio::test]
/// Expect an athlete to be created and listed with typed fields
async fn creates_and_lists_athlete() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;

    let (status, _) = app
        .send(
            Method::POST,
            "/v1/athlete",
            Some(json!({
                "club_id": club.id,
                "name": "Rina",
                "dob": "2005-07-21",
                "phone_number": "0814000000",
                "gender": "FEMALE",
                "email": "rina@example.com",
                "register_date": "2020-02-02",
                "active": "TRUE"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = app.send(Method::GET, "/v1/athlete", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["athletes"][0]["gender"], "FEMALE");
    assert_eq!(list["athletes"][0]["dob"], "2005-07-21");
    assert_eq!(list["athletes"][0]["active"], "TRUE");

    Ok(())
}

#[tokio::test]
/// Expect an unrecognized gender to be reported as a wrong format
async fn rejects_unknown_gender() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;

    let (status, error) = app
        .send(
            Method::POST,
            "/v1/athlete",
            Some(json!({
                "club_id": club.id,
                "name": "Rina",
                "dob": "2005-07-21",
                "phone_number": "0814000000",
                "gender": "OTHER",
                "email": "rina@example.com",
                "register_date": "2020-02-02"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["message"],
        "Wrong Format fields: [gender (format: MALE or FEMALE)]"
    );

    Ok(())
}

#[tokio::test]
/// Expect an update without active to store UNKNOWN
async fn update_replaces_fields() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;
    let athlete = app
        .test
        .athlete()
        .insert_mock_athlete(&club.id, "Rina")
        .await?;

    let (status, updated) = app
        .send(
            Method::PUT,
            "/v1/athlete",
            Some(json!({
                "id": athlete.id,
                "name": "Rina Putri",
                "dob": "2005-07-21",
                "register_date": "2020-02-02"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["athlete"]["name"], "Rina Putri");
    assert_eq!(updated["athlete"]["active"], "UNKNOWN");
    assert_eq!(updated["athlete"]["email"], "");
    assert_eq!(updated["athlete"]["club_id"], club.id.as_str());

    Ok(())
}

#[tokio::test]
/// Expect a second delete of the same athlete to be rejected without side effects
async fn delete_twice_leaves_no_athlete() -> Result<(), TestError> {
    let app = TestApp::new().await?;
    let club = app.test.club().insert_mock_club("Garuda").await?;
    let athlete = app
        .test
        .athlete()
        .insert_mock_athlete(&club.id, "Rina")
        .await?;

    let (status, body) = app
        .send(Method::DELETE, "/v1/athlete", Some(json!({ "id": athlete.id })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);

    let (status, error) = app
        .send(Method::DELETE, "/v1/athlete", Some(json!({ "id": athlete.id })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "wrong uuid provided");

    let (status, list) = app
        .send(Method::GET, &format!("/v1/athlete?id={}", athlete.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 0);

    Ok(())
}

#[tokio::test]
/// Expect a malformed athlete query string to return the error envelope
async fn rejects_malformed_query() -> Result<(), TestError> {
    let app = TestApp::new().await?;

    let (status, error) = app.send(Method::GET, "/v1/athlete?id=a&id=b", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 400);

    Ok(())
}
