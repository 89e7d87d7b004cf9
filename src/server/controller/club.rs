use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, DeleteDto, ErrorDto, ListParams},
        club::{ClubListDto, CreateClubDto, UpdateClubDto, UpdatedClubDto},
    },
    server::{
        controller::util::{json::JsonBody, query::QueryParams},
        error::Error,
        model::app::AppState,
        service::club::ClubService,
    },
};

pub static CLUB_TAG: &str = "club";

/// Create a club
#[utoipa::path(
    post,
    path = "/v1/club",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 201, description = "Club created", body = CreatedDto),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateClubDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "create_club", "handling request");

    let id = ClubService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List clubs, optionally restricted to the comma-separated `id` parameter
#[utoipa::path(
    get,
    path = "/v1/club",
    tag = CLUB_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Clubs found", body = ClubListDto),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clubs(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "list_clubs", "handling request");

    let clubs = ClubService::new(&state.db).list(&params.ids()).await?;

    Ok(Json(ClubListDto {
        total: clubs.len(),
        clubs,
    }))
}

/// Update the non-empty fields of a club
#[utoipa::path(
    put,
    path = "/v1/club",
    tag = CLUB_TAG,
    request_body = UpdateClubDto,
    responses(
        (status = 200, description = "Club updated", body = UpdatedClubDto),
        (status = 400, description = "Missing or unknown id, or invalid value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<UpdateClubDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "update_club", "handling request");

    let club = ClubService::new(&state.db).update(dto).await?;

    Ok(Json(UpdatedClubDto { club }))
}

/// Delete a club
#[utoipa::path(
    delete,
    path = "/v1/club",
    tag = CLUB_TAG,
    request_body = DeleteDto,
    responses(
        (status = 200, description = "Club deleted, the body is null"),
        (status = 400, description = "Missing or unknown id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<DeleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "delete_club", "handling request");

    ClubService::new(&state.db).delete(&dto.id).await?;

    Ok(Json(()))
}
