use sea_orm::DatabaseConnection;

use crate::{
    model::account::{AccountDto, CreateAccountDto, UpdateAccountDto},
    server::{
        data::account::{AccountFilter, AccountRepository},
        error::{request::RequestError, Error},
        model::db::AccountModel,
        service::new_id,
        validation::{self, require_id},
    },
};

/// Service for managing accounts.
///
/// Passwords are stored and compared as plain text; they are never returned.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateAccountDto) -> Result<String, Error> {
        let account = validation::account::validate_create(new_id(), dto)?;

        Ok(AccountRepository::new(self.db).create(account).await?)
    }

    pub async fn list(&self, filter: &AccountFilter) -> Result<Vec<AccountDto>, Error> {
        let accounts = AccountRepository::new(self.db).get(filter).await?;

        Ok(accounts.into_iter().map(AccountDto::from).collect())
    }

    /// Replaces name, email and password of an existing account.
    pub async fn update(&self, dto: UpdateAccountDto) -> Result<AccountDto, Error> {
        let account_repo = AccountRepository::new(self.db);
        let id = require_id(&dto.id)?.to_string();

        let filter = AccountFilter {
            ids: vec![id.clone()],
            ..Default::default()
        };

        if account_repo.get(&filter).await?.is_empty() {
            return Err(RequestError::WrongId.into());
        }

        account_repo
            .update(AccountModel {
                id,
                name: dto.name,
                email: dto.email,
                password: dto.password,
            })
            .await?;

        let updated = account_repo
            .get(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        Ok(updated.into())
    }

    /// Deletes an existing account, its token goes with it.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let account_repo = AccountRepository::new(self.db);
        let id = require_id(id)?;

        let filter = AccountFilter {
            ids: vec![id.to_string()],
            ..Default::default()
        };

        if account_repo.get(&filter).await?.is_empty() {
            return Err(RequestError::WrongId.into());
        }

        account_repo.delete(id).await?;

        Ok(())
    }
}
