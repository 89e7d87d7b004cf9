use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, DeleteDto, ErrorDto},
        coach::CreateCoachDto,
    },
    server::{
        controller::util::json::JsonBody, error::Error, model::app::AppState,
        service::coach::CoachService,
    },
};

pub static COACH_TAG: &str = "coach";

/// Create a coach
#[utoipa::path(
    post,
    path = "/v1/coach",
    tag = COACH_TAG,
    request_body = CreateCoachDto,
    responses(
        (status = 201, description = "Coach created", body = CreatedDto),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coach(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateCoachDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "create_coach", "handling request");

    let id = CoachService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// Delete a coach
///
/// Succeeds whether or not the coach exists.
#[utoipa::path(
    delete,
    path = "/v1/coach",
    tag = COACH_TAG,
    request_body = DeleteDto,
    responses(
        (status = 200, description = "Coach deleted, the body is null"),
        (status = 400, description = "Missing id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coach(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<DeleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "delete_coach", "handling request");

    CoachService::new(&state.db).delete(&dto.id).await?;

    Ok(Json(()))
}
