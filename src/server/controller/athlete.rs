use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, DeleteDto, ErrorDto, ListParams},
        athlete::{AthleteListDto, CreateAthleteDto, UpdateAthleteDto, UpdatedAthleteDto},
    },
    server::{
        controller::util::{json::JsonBody, query::QueryParams},
        error::Error,
        model::app::AppState,
        service::athlete::AthleteService,
    },
};

pub static ATHLETE_TAG: &str = "athlete";

/// Create an athlete
#[utoipa::path(
    post,
    path = "/v1/athlete",
    tag = ATHLETE_TAG,
    request_body = CreateAthleteDto,
    responses(
        (status = 201, description = "Athlete created", body = CreatedDto),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateAthleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "create_athlete", "handling request");

    let id = AthleteService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List athletes, optionally restricted to the comma-separated `id` parameter
#[utoipa::path(
    get,
    path = "/v1/athlete",
    tag = ATHLETE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Athletes found", body = AthleteListDto),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_athletes(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "list_athletes", "handling request");

    let athletes = AthleteService::new(&state.db).list(&params.ids()).await?;

    Ok(Json(AthleteListDto {
        total: athletes.len(),
        athletes,
    }))
}

/// Replace every field of an athlete
#[utoipa::path(
    put,
    path = "/v1/athlete",
    tag = ATHLETE_TAG,
    request_body = UpdateAthleteDto,
    responses(
        (status = 200, description = "Athlete updated", body = UpdatedAthleteDto),
        (status = 400, description = "Missing or unknown id, or invalid value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<UpdateAthleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "update_athlete", "handling request");

    let athlete = AthleteService::new(&state.db).update(dto).await?;

    Ok(Json(UpdatedAthleteDto { athlete }))
}

/// Delete an athlete
#[utoipa::path(
    delete,
    path = "/v1/athlete",
    tag = ATHLETE_TAG,
    request_body = DeleteDto,
    responses(
        (status = 200, description = "Athlete deleted, the body is null"),
        (status = 400, description = "Missing or unknown id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<DeleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "delete_athlete", "handling request");

    AthleteService::new(&state.db).delete(&dto.id).await?;

    Ok(Json(()))
}
