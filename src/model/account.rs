use serde::{Deserialize, Serialize};

/// Account as returned by the API, the password is never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<entity::account::Model> for AccountDto {
    fn from(account: entity::account::Model) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateAccountDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UpdateAccountDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Query parameters of `GET /v1/account`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct AccountListParams {
    /// Comma-separated account identifiers
    pub id: Option<String>,
    /// Exact email address to match
    pub email: Option<String>,
}

impl AccountListParams {
    pub fn ids(&self) -> Vec<String> {
        crate::model::api::split_ids(self.id.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountListDto {
    pub total: usize,
    pub accounts: Vec<AccountDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedAccountDto {
    pub account: AccountDto,
}
