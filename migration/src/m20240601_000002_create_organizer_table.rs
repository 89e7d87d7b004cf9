use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000001_create_club_table::Club;

static IDX_ORGANIZER_NAME: &str = "idx_organizer_name";
static FK_ORGANIZER_CLUB_ID: &str = "fk_organizer_club_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizer::Table)
                    .if_not_exists()
                    .col(string(Organizer::Id).primary_key())
                    .col(string(Organizer::ClubId))
                    .col(string(Organizer::Name))
                    .col(string(Organizer::Position))
                    .col(date(Organizer::RegisterDate))
                    .col(string_len(Organizer::PhoneNumber, 20))
                    .col(string_len(Organizer::Active, 10))
                    .col(string(Organizer::Email))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORGANIZER_CLUB_ID)
                            .from(Organizer::Table, Organizer::ClubId)
                            .to(Club::Table, Club::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORGANIZER_NAME)
                    .table(Organizer::Table)
                    .col(Organizer::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORGANIZER_NAME)
                    .table(Organizer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Organizer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Organizer {
    Table,
    Id,
    ClubId,
    Name,
    Position,
    RegisterDate,
    PhoneNumber,
    Active,
    Email,
}
