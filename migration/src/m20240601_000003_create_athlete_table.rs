use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000001_create_club_table::Club;

static IDX_ATHLETE_NAME: &str = "idx_athlete_name";
static IDX_ATHLETE_CLUB_ID: &str = "idx_athlete_club_id";
static FK_ATHLETE_CLUB_ID: &str = "fk_athlete_club_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Athlete::Table)
                    .if_not_exists()
                    .col(string(Athlete::Id).primary_key())
                    .col(string(Athlete::ClubId))
                    .col(string(Athlete::Name))
                    .col(date(Athlete::Dob))
                    .col(string_len(Athlete::PhoneNumber, 20))
                    .col(string_len(Athlete::Gender, 10))
                    .col(string(Athlete::Email))
                    .col(date(Athlete::RegisterDate))
                    .col(string_len(Athlete::Active, 10))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATHLETE_CLUB_ID)
                            .from(Athlete::Table, Athlete::ClubId)
                            .to(Club::Table, Club::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATHLETE_NAME)
                    .table(Athlete::Table)
                    .col(Athlete::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATHLETE_CLUB_ID)
                    .table(Athlete::Table)
                    .col(Athlete::ClubId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATHLETE_CLUB_ID)
                    .table(Athlete::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATHLETE_NAME)
                    .table(Athlete::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Athlete::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Athlete {
    Table,
    Id,
    ClubId,
    Name,
    Dob,
    PhoneNumber,
    Gender,
    Email,
    RegisterDate,
    Active,
}
