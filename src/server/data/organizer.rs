use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, UpdateResult,
};

use crate::server::{
    data::filter_by_ids,
    model::db::{OrganizerModel, OrganizerWithClub},
};

pub struct OrganizerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizerRepository<'a, C> {
    /// Creates a new instance of [`OrganizerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an organizer, the referenced club must exist
    pub async fn create(&self, organizer: OrganizerModel) -> Result<String, DbErr> {
        let organizer = organizer
            .into_active_model()
            .reset_all()
            .insert(self.db)
            .await?;

        Ok(organizer.id)
    }

    /// Gets organizers joined with their club, or every organizer when `ids` is empty
    pub async fn get(&self, ids: &[String]) -> Result<Vec<OrganizerWithClub>, DbErr> {
        let rows = filter_by_ids(
            entity::prelude::Organizer::find().find_also_related(entity::prelude::Club),
            entity::organizer::Column::Id,
            ids,
        )
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(organizer, club)| OrganizerWithClub { organizer, club })
            .collect())
    }

    /// Replaces every column of the organizer with the same id
    pub async fn update(&self, organizer: OrganizerModel) -> Result<UpdateResult, DbErr> {
        let id = organizer.id.clone();

        entity::prelude::Organizer::update_many()
            .set(organizer.into_active_model().reset_all())
            .filter(entity::organizer::Column::Id.eq(id))
            .exec(self.db)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Organizer::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
