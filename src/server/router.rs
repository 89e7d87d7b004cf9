//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint lives under `/v1`. Each resource path serves the methods it
//! supports and axum answers any other method with `405 Method Not Allowed`.
//! The generated OpenAPI document is served at `/v1/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `POST | GET | PUT | DELETE /v1/club`
/// - `POST | GET | PUT | DELETE /v1/organizer`
/// - `POST | GET | PUT | DELETE /v1/athlete`
/// - `POST | DELETE /v1/coach`
/// - `POST | GET | PUT | DELETE /v1/account`
/// - `POST /v1/signin`
/// - `POST /v1/signout`
/// - `GET /v1/openapi.json`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::club::CLUB_TAG, description = "Club API routes"),
        (name = controller::organizer::ORGANIZER_TAG, description = "Organizer API routes"),
        (name = controller::athlete::ATHLETE_TAG, description = "Athlete API routes"),
        (name = controller::coach::COACH_TAG, description = "Coach API routes"),
        (name = controller::account::ACCOUNT_TAG, description = "Account API routes"),
        (name = controller::auth::AUTH_TAG, description = "Sign in and sign out"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::club::create_club,
            controller::club::list_clubs,
            controller::club::update_club,
            controller::club::delete_club
        ))
        .routes(routes!(
            controller::organizer::create_organizer,
            controller::organizer::list_organizers,
            controller::organizer::update_organizer,
            controller::organizer::delete_organizer
        ))
        .routes(routes!(
            controller::athlete::create_athlete,
            controller::athlete::list_athletes,
            controller::athlete::update_athlete,
            controller::athlete::delete_athlete
        ))
        .routes(routes!(
            controller::coach::create_coach,
            controller::coach::delete_coach
        ))
        .routes(routes!(
            controller::account::create_account,
            controller::account::list_accounts,
            controller::account::update_account,
            controller::account::delete_account
        ))
        .routes(routes!(controller::auth::sign_in))
        .routes(routes!(controller::auth::sign_out))
        .split_for_parts();

    routes.route(
        "/v1/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
