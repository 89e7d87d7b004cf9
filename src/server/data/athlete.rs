use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, UpdateResult,
};

use crate::server::{data::filter_by_ids, model::db::AthleteModel};

pub struct AthleteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AthleteRepository<'a, C> {
    /// Creates a new instance of [`AthleteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, athlete: AthleteModel) -> Result<String, DbErr> {
        let athlete = athlete
            .into_active_model()
            .reset_all()
            .insert(self.db)
            .await?;

        Ok(athlete.id)
    }

    /// Gets athletes by id, or every athlete when `ids` is empty
    pub async fn get(&self, ids: &[String]) -> Result<Vec<AthleteModel>, DbErr> {
        filter_by_ids(
            entity::prelude::Athlete::find(),
            entity::athlete::Column::Id,
            ids,
        )
        .all(self.db)
        .await
    }

    pub async fn update(&self, athlete: AthleteModel) -> Result<UpdateResult, DbErr> {
        let id = athlete.id.clone();

        entity::prelude::Athlete::update_many()
            .set(athlete.into_active_model().reset_all())
            .filter(entity::athlete::Column::Id.eq(id))
            .exec(self.db)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Athlete::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
