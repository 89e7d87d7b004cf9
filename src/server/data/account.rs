use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, UpdateResult,
};

use crate::server::{data::filter_by_ids, model::db::AccountModel};

/// Criteria for [`AccountRepository::get`]; empty criteria match every account.
#[derive(Debug, Default, Clone)]
pub struct AccountFilter {
    pub ids: Vec<String>,
    pub email: Option<String>,
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an account, failing if the email is already registered
    pub async fn create(&self, account: AccountModel) -> Result<String, DbErr> {
        let account = account
            .into_active_model()
            .reset_all()
            .insert(self.db)
            .await?;

        Ok(account.id)
    }

    pub async fn get(&self, filter: &AccountFilter) -> Result<Vec<AccountModel>, DbErr> {
        let mut query = filter_by_ids(
            entity::prelude::Account::find(),
            entity::account::Column::Id,
            &filter.ids,
        );

        if let Some(email) = &filter.email {
            query = query.filter(entity::account::Column::Email.eq(email.as_str()));
        }

        query.all(self.db).await
    }

    /// Finds the account registered under `email`
    pub async fn get_by_email(&self, email: &str) -> Result<Option<AccountModel>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn update(&self, account: AccountModel) -> Result<UpdateResult, DbErr> {
        let id = account.id.clone();

        entity::prelude::Account::update_many()
            .set(account.into_active_model().reset_all())
            .filter(entity::account::Column::Id.eq(id))
            .exec(self.db)
            .await
    }

    /// Deletes an account together with its token and verification code
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
