use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{CreatedDto, DeleteDto, ErrorDto, ListParams},
        organizer::{OrganizerListDto, CreateOrganizerDto, UpdateOrganizerDto, UpdatedOrganizerDto},
    },
    server::{
        controller::util::{json::JsonBody, query::QueryParams},
        error::Error,
        model::app::AppState,
        service::organizer::OrganizerService,
    },
};

pub static ORGANIZER_TAG: &str = "organizer";

/// Create an organizer
#[utoipa::path(
    post,
    path = "/v1/organizer",
    tag = ORGANIZER_TAG,
    request_body = CreateOrganizerDto,
    responses(
        (status = 201, description = "Organizer created", body = CreatedDto),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_organizer(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateOrganizerDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "create_organizer", "handling request");

    let id = OrganizerService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List organizers with their club, optionally restricted to the comma-separated `id` parameter
#[utoipa::path(
    get,
    path = "/v1/organizer",
    tag = ORGANIZER_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Organizers found", body = OrganizerListDto),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_organizers(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "list_organizers", "handling request");

    let organizers = OrganizerService::new(&state.db).list(&params.ids()).await?;

    Ok(Json(OrganizerListDto {
        total: organizers.len(),
        organizers,
    }))
}

/// Update the non-empty fields of an organizer
#[utoipa::path(
    put,
    path = "/v1/organizer",
    tag = ORGANIZER_TAG,
    request_body = UpdateOrganizerDto,
    responses(
        (status = 200, description = "Organizer updated", body = UpdatedOrganizerDto),
        (status = 400, description = "Missing or unknown id, or invalid value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_organizer(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<UpdateOrganizerDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "update_organizer", "handling request");

    let organizer = OrganizerService::new(&state.db).update(dto).await?;

    Ok(Json(UpdatedOrganizerDto { organizer }))
}

/// Delete an organizer
#[utoipa::path(
    delete,
    path = "/v1/organizer",
    tag = ORGANIZER_TAG,
    request_body = DeleteDto,
    responses(
        (status = 200, description = "Organizer deleted, the body is null"),
        (status = 400, description = "Missing or unknown id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_organizer(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<DeleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "delete_organizer", "handling request");

    OrganizerService::new(&state.db).delete(&dto.id).await?;

    Ok(Json(()))
}
