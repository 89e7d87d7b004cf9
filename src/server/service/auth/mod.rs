//! Sign-in and sign-out.
//!
//! Each account holds at most one token. Sign-in returns the current token while it
//! is valid and otherwise replaces it with a fresh one, deleting the old row and
//! inserting the new row in one transaction. Sign-out deletes the token.

pub mod token;

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::CredentialsDto,
    server::{
        data::{account::AccountRepository, token::TokenRepository},
        error::{auth::AuthError, Error},
        model::db::AccountModel,
        service::auth::token::{generate_token, is_expired, token_lifetime},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs an account in at the current time, see [`AuthService::sign_in_at`].
    pub async fn sign_in(&self, credentials: CredentialsDto) -> Result<String, Error> {
        self.sign_in_at(credentials, Utc::now().naive_utc()).await
    }

    /// Verifies credentials and returns a token valid at `now`.
    ///
    /// # Returns
    /// - `Ok(String)` - The existing token if it has not expired, otherwise a new
    ///   token expiring 24 hours after `now`
    /// - `Err(Error::AuthError)` - Missing credentials, unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sign_in_at(
        &self,
        credentials: CredentialsDto,
        now: NaiveDateTime,
    ) -> Result<String, Error> {
        let account = self.verify(&credentials).await?;

        if let Some(token) = TokenRepository::new(self.db).get(&account.id).await? {
            if !is_expired(token.expired, now) {
                return Ok(token.token);
            }
        }

        let new_token = generate_token();

        let txn = self.db.begin().await?;
        let token_repo = TokenRepository::new(&txn);
        token_repo.delete(&account.id).await?;
        token_repo
            .create(&account.id, &new_token, now + token_lifetime())
            .await?;
        txn.commit().await?;

        tracing::debug!(account_id = %account.id, "issued new token");

        Ok(new_token)
    }

    /// Verifies credentials and deletes the account's token, if any.
    pub async fn sign_out(&self, credentials: CredentialsDto) -> Result<(), Error> {
        let account = self.verify(&credentials).await?;

        TokenRepository::new(self.db).delete(&account.id).await?;

        Ok(())
    }

    /// Looks up the account by email and compares the password as plain text.
    ///
    /// An unknown email and a wrong password yield the same error.
    async fn verify(&self, credentials: &CredentialsDto) -> Result<AccountModel, Error> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let account = AccountRepository::new(self.db)
            .get_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if account.password != credentials.password {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(account)
    }
}
