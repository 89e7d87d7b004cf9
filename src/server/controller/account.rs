use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        account::{
            AccountListDto, AccountListParams, CreateAccountDto, UpdateAccountDto,
            UpdatedAccountDto,
        },
        api::{CreatedDto, DeleteDto, ErrorDto},
    },
    server::{
        controller::util::{json::JsonBody, query::QueryParams},
        data::account::AccountFilter,
        error::Error,
        model::app::AppState,
        service::account::AccountService,
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Create an account
#[utoipa::path(
    post,
    path = "/v1/account",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = CreatedDto),
        (status = 400, description = "Malformed body or missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "create_account", "handling request");

    let id = AccountService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List accounts, optionally filtered by `id` and `email`
#[utoipa::path(
    get,
    path = "/v1/account",
    tag = ACCOUNT_TAG,
    params(AccountListParams),
    responses(
        (status = 200, description = "Accounts found", body = AccountListDto),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_accounts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<AccountListParams>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "list_accounts", "handling request");

    let filter = AccountFilter {
        ids: params.ids(),
        email: params.email.filter(|email| !email.is_empty()),
    };
    let accounts = AccountService::new(&state.db).list(&filter).await?;

    Ok(Json(AccountListDto {
        total: accounts.len(),
        accounts,
    }))
}

/// Replace the name, email and password of an account
#[utoipa::path(
    put,
    path = "/v1/account",
    tag = ACCOUNT_TAG,
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account updated", body = UpdatedAccountDto),
        (status = 400, description = "Missing or unknown id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_account(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<UpdateAccountDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "update_account", "handling request");

    let account = AccountService::new(&state.db).update(dto).await?;

    Ok(Json(UpdatedAccountDto { account }))
}

/// Delete an account and its token
#[utoipa::path(
    delete,
    path = "/v1/account",
    tag = ACCOUNT_TAG,
    request_body = DeleteDto,
    responses(
        (status = 200, description = "Account deleted, the body is null"),
        (status = 400, description = "Missing or unknown id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<DeleteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(method = "delete_account", "handling request");

    AccountService::new(&state.db).delete(&dto.id).await?;

    Ok(Json(()))
}
