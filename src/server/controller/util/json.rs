use axum::{extract::rejection::JsonRejection, extract::FromRequest};

use crate::server::error::{request::RequestError, Error};

/// JSON body extractor whose rejection is rendered as the API error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        RequestError::InvalidBody(rejection.body_text()).into()
    }
}
