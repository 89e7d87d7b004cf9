use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000005_create_account_table::Account;

static FK_VERIFICATION_CODE_ACCOUNT_ID: &str = "fk_verification_code_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationCode::Table)
                    .if_not_exists()
                    .col(string(VerificationCode::AccountId).primary_key())
                    .col(text(VerificationCode::Code))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VERIFICATION_CODE_ACCOUNT_ID)
                            .from(VerificationCode::Table, VerificationCode::AccountId)
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
            .drop_table(Table::drop().table(VerificationCode::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VerificationCode {
    Table,
    AccountId,
    Code,
}
