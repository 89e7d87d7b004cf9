use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

use crate::server::{data::filter_by_ids, model::db::VerificationCodeModel};

/// Verification codes issued to accounts. Not exposed over HTTP.
pub struct VerificationCodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VerificationCodeRepository<'a, C> {
    /// Creates a new instance of [`VerificationCodeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        account_id: &str,
        code: &str,
    ) -> Result<VerificationCodeModel, DbErr> {
        let code = entity::verification_code::ActiveModel {
            account_id: ActiveValue::Set(account_id.to_string()),
            code: ActiveValue::Set(code.to_string()),
        };

        code.insert(self.db).await
    }

    /// Gets codes by account id, or every code when `account_ids` is empty
    pub async fn get(&self, account_ids: &[String]) -> Result<Vec<VerificationCodeModel>, DbErr> {
        filter_by_ids(
            entity::prelude::VerificationCode::find(),
            entity::verification_code::Column::AccountId,
            account_ids,
        )
        .all(self.db)
        .await
    }

    /// Deletes every row holding `code`
    pub async fn delete_by_code(&self, code: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::Code.eq(code))
            .exec(self.db)
            .await
    }
}
