use crate::{
    model::account::CreateAccountDto,
    server::{error::request::RequestError, model::db::AccountModel, validation::FieldReport},
};

/// Validates an account creation request. The password is kept as submitted.
pub fn validate_create(id: String, dto: CreateAccountDto) -> Result<AccountModel, RequestError> {
    let mut report = FieldReport::new();

    report.require("name", &dto.name);
    report.require("email", &dto.email);
    report.require("password", &dto.password);

    report.finish()?;

    Ok(AccountModel {
        id,
        name: dto.name,
        email: dto.email,
        password: dto.password,
    })
}
