use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> AccountFixtures<'a> {
    /// Insert a mock account with the provided credentials.
    pub async fn insert_mock_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::account::Model, TestError> {
        Ok(entity::prelude::Account::insert(
            factory::mock_account_model(email, password).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a token row for an existing account.
    pub async fn insert_token(
        &self,
        account_id: &str,
        token: &str,
        expired: NaiveDateTime,
    ) -> Result<entity::token::Model, TestError> {
        Ok(
            entity::prelude::Token::insert(entity::token::ActiveModel {
                account_id: ActiveValue::Set(account_id.to_string()),
                token: ActiveValue::Set(token.to_string()),
                expired: ActiveValue::Set(expired),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
