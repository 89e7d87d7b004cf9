use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Client errors, all answered with 400 Bad Request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// Body could not be decoded as the expected JSON document.
    #[error("{0}")]
    InvalidBody(String),
    /// Aggregated field validation failure.
    #[error("{0}")]
    Validation(String),
    #[error("no uuid provided")]
    NoId,
    #[error("wrong uuid provided")]
    WrongId,
    #[error("wrong value for active, should be FALSE or TRUE")]
    InvalidActive,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Bad request: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
