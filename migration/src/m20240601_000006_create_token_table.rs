use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000005_create_account_table::Account;

static FK_TOKEN_ACCOUNT_ID: &str = "fk_token_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Token::Table)
                    .if_not_exists()
                    .col(string(Token::AccountId).primary_key())
                    .col(text(Token::Token))
                    .col(timestamp(Token::Expired))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOKEN_ACCOUNT_ID)
                            .from(Token::Table, Token::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Token::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Token {
    Table,
    AccountId,
    Token,
    Expired,
}
