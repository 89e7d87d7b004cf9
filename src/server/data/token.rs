use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

use crate::server::model::db::TokenModel;

pub struct TokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TokenRepository<'a, C> {
    /// Creates a new instance of [`TokenRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the token of an account
    pub async fn get(&self, account_id: &str) -> Result<Option<TokenModel>, DbErr> {
        entity::prelude::Token::find_by_id(account_id.to_string())
            .one(self.db)
            .await
    }

    /// Inserts a token, fails if the account already holds one
    pub async fn create(
        &self,
        account_id: &str,
        token: &str,
        expired: NaiveDateTime,
    ) -> Result<TokenModel, DbErr> {
        let token = entity::token::ActiveModel {
            account_id: ActiveValue::Set(account_id.to_string()),
            token: ActiveValue::Set(token.to_string()),
            expired: ActiveValue::Set(expired),
        };

        token.insert(self.db).await
    }

    /// Deletes the token of an account
    ///
    /// Returns OK regardless of a token existing.
    pub async fn delete(&self, account_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Token::delete_by_id(account_id.to_string())
            .exec(self.db)
            .await
    }
}
