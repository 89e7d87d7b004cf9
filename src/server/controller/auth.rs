use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{CredentialsDto, TokenDto},
    },
    server::{
        controller::util::json::JsonBody, error::Error, model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with email and password
///
/// Returns the account's current token, issuing a new one when none exists or the
/// previous one has expired.
#[utoipa::path(
    post,
    path = "/v1/signin",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed in", body = TokenDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "sign_in", "handling request");

    let token = AuthService::new(&state.db).sign_in(credentials).await?;

    Ok(Json(TokenDto { token }))
}

/// Sign out, invalidating the account's token
#[utoipa::path(
    post,
    path = "/v1/signout",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Signed out, the body is null"),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "sign_out", "handling request");

    AuthService::new(&state.db).sign_out(credentials).await?;

    Ok(Json(()))
}
