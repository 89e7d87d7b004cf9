use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn organizer<'a>(&'a self) -> OrganizerFixtures<'a> {
        OrganizerFixtures { setup: self }
    }
}

pub struct OrganizerFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> OrganizerFixtures<'a> {
    /// Insert a mock organizer for an existing club.
    pub async fn insert_mock_organizer(
        &self,
        club_id: &str,
        name: &str,
    ) -> Result<entity::organizer::Model, TestError> {
        Ok(entity::prelude::Organizer::insert(
            factory::mock_organizer_model(club_id, name).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock club and an organizer belonging to it.
    pub async fn insert_mock_organizer_with_club(
        &self,
        name: &str,
    ) -> Result<(entity::organizer::Model, entity::club::Model), TestError> {
        let club = self.setup.club().insert_mock_club("Organizer Club").await?;
        let organizer = self.insert_mock_organizer(&club.id, name).await?;

        Ok((organizer, club))
    }
}
