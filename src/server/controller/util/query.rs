use axum::{extract::rejection::QueryRejection, extract::FromRequestParts};

use crate::server::error::{request::RequestError, Error};

/// Query string extractor whose rejection is rendered as the API error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        RequestError::InvalidBody(rejection.body_text()).into()
    }
}
