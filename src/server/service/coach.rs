use sea_orm::DatabaseConnection;

use crate::{
    model::coach::CreateCoachDto,
    server::{
        data::coach::CoachRepository,
        error::Error,
        service::new_id,
        validation::{self, require_id},
    },
};

/// Service for managing coaches, which only support create and delete.
pub struct CoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachService<'a> {
    /// Creates a new instance of [`CoachService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateCoachDto) -> Result<String, Error> {
        let coach = validation::coach::validate_create(new_id(), dto)?;

        Ok(CoachRepository::new(self.db).create(coach).await?)
    }

    /// Deletes a coach without checking that it exists.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let id = require_id(id)?;

        CoachRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
