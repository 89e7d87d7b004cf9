use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, UpdateResult,
};

use crate::server::{data::filter_by_ids, model::db::ClubModel};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    /// Creates a new instance of [`ClubRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a club whose id was generated by the caller, returning that id
    pub async fn create(&self, club: ClubModel) -> Result<String, DbErr> {
        let club = club.into_active_model().reset_all().insert(self.db).await?;

        Ok(club.id)
    }

    /// Gets clubs by id, or every club when `ids` is empty
    pub async fn get(&self, ids: &[String]) -> Result<Vec<ClubModel>, DbErr> {
        filter_by_ids(entity::prelude::Club::find(), entity::club::Column::Id, ids)
            .all(self.db)
            .await
    }

    /// Replaces every column of the club with the same id
    ///
    /// Check [`UpdateResult::rows_affected`] to learn whether the club existed.
    pub async fn update(&self, club: ClubModel) -> Result<UpdateResult, DbErr> {
        let id = club.id.clone();

        entity::prelude::Club::update_many()
            .set(club.into_active_model().reset_all())
            .filter(entity::club::Column::Id.eq(id))
            .exec(self.db)
            .await
    }

    /// Deletes a club
    ///
    /// Fails on the foreign key while organizers or athletes still reference the club.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Club::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
