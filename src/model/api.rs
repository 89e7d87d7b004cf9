use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The HTTP status code of the response
    pub code: u16,
    /// The error message
    pub message: String,
}

/// The response when a record is created
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedDto {
    /// Identifier of the newly created record
    pub id: String,
}

/// Request body for deleting a record by its identifier
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct DeleteDto {
    pub id: String,
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ListParams {
    /// Comma-separated record identifiers; all records are returned when absent
    pub id: Option<String>,
}

impl ListParams {
    /// Splits the `id` parameter into identifiers, dropping empty segments.
    pub fn ids(&self) -> Vec<String> {
        split_ids(self.id.as_deref())
    }
}

pub(crate) fn split_ids(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
