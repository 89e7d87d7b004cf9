use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /v1/signin` and `POST /v1/signout`
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}
