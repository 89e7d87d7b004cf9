pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_club_table;
mod m20240601_000002_create_organizer_table;
mod m20240601_000003_create_athlete_table;
mod m20240601_000004_create_coach_table;
mod m20240601_000005_create_account_table;
mod m20240601_000006_create_token_table;
mod m20240601_000007_create_verification_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_club_table::Migration),
            Box::new(m20240601_000002_create_organizer_table::Migration),
            Box::new(m20240601_000003_create_athlete_table::Migration),
            Box::new(m20240601_000004_create_coach_table::Migration),
            Box::new(m20240601_000005_create_account_table::Migration),
            Box::new(m20240601_000006_create_token_table::Migration),
            Box::new(m20240601_000007_create_verification_code_table::Migration),
        ]
    }
}
