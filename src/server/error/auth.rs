use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing email or password")]
    MissingCredentials,
    /// Returned for both an unknown email and a wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication error: {}", self);

        match self {
            Self::MissingCredentials => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            Self::InvalidCredentials => error_response(StatusCode::UNAUTHORIZED, self.to_string()),
        }
    }
}
