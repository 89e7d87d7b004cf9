use sea_orm_migration::{prelude::*, schema::*};

static IDX_COACH_NAME: &str = "idx_coach_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coach::Table)
                    .if_not_exists()
                    .col(string(Coach::Id).primary_key())
                    .col(string(Coach::Name))
                    .col(string(Coach::Dob))
                    .col(string_len(Coach::PhoneNumber, 20))
                    .col(string_len(Coach::Gender, 10))
                    .col(string(Coach::Email))
                    .col(string(Coach::Discipline))
                    .col(date(Coach::RegisterDate))
                    .col(string_len(Coach::Active, 10))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COACH_NAME)
                    .table(Coach::Table)
                    .col(Coach::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_COACH_NAME).table(Coach::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Coach::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Coach {
    Table,
    Id,
    Name,
    Dob,
    PhoneNumber,
    Gender,
    Email,
    Discipline,
    RegisterDate,
    Active,
}
