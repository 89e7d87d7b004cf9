//! Error types for the roster server.
//!
//! Every error implements `IntoResponse` and renders the `{code, message}` envelope
//! described by [`ErrorDto`]. Client errors carry their message through to the
//! response while storage and configuration failures are logged and replaced with a
//! generic message.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, request::RequestError},
};

/// Main error type for the roster server.
///
/// Aggregates the domain-specific error types and database errors so handlers
/// and services can propagate any of them with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client supplied a malformed or invalid request.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Credential check failed during sign-in or sign-out.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Maps errors to HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For decode, validation and unknown identifier errors
/// - 401 Unauthorized - For failed credential checks
/// - 500 Internal Server Error - For everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error envelope for `status` with the provided message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code: status.as_u16(),
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so database details are never leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
