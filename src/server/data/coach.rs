use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, IntoActiveModel};

use crate::server::model::db::CoachModel;

/// Coaches can only be created and deleted.
pub struct CoachRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoachRepository<'a, C> {
    /// Creates a new instance of [`CoachRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, coach: CoachModel) -> Result<String, DbErr> {
        let coach = coach.into_active_model().reset_all().insert(self.db).await?;

        Ok(coach.id)
    }

    /// Deletes a coach
    ///
    /// Returns OK regardless of the coach existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Coach::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
