use serde::{Deserialize, Serialize};

/// Body of `POST /v1/coach`. `dob` is stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateCoachDto {
    pub name: String,
    pub dob: String,
    pub phone_number: String,
    pub gender: String,
    pub email: String,
    pub discipline: String,
    pub register_date: String,
    pub active: String,
}
