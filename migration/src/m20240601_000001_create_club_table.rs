use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLUB_NAME: &str = "idx_club_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(string(Club::Id).primary_key())
                    .col(string(Club::Name))
                    .col(string(Club::Country))
                    .col(string(Club::Province))
                    .col(string(Club::District))
                    .col(date(Club::EstablishDate))
                    .col(string(Club::Logo))
                    .col(text(Club::Address))
                    .col(string(Club::EmailPic))
                    .col(string(Club::Pic))
                    .col(string(Club::Discipline))
                    .col(string_len(Club::PhoneNumber, 20))
                    .col(string_len(Club::Active, 10))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLUB_NAME)
                    .table(Club::Table)
                    .col(Club::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_CLUB_NAME).table(Club::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Club::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Club {
    Table,
    Id,
    Name,
    Country,
    Province,
    District,
    EstablishDate,
    Logo,
    Address,
    EmailPic,
    Pic,
    Discipline,
    PhoneNumber,
    Active,
}
