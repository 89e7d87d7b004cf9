use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn athlete<'a>(&'a self) -> AthleteFixtures<'a> {
        AthleteFixtures { setup: self }
    }
}

pub struct AthleteFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> AthleteFixtures<'a> {
    /// Insert a mock athlete for an existing club.
    pub async fn insert_mock_athlete(
        &self,
        club_id: &str,
        name: &str,
    ) -> Result<entity::athlete::Model, TestError> {
        Ok(entity::prelude::Athlete::insert(
            factory::mock_athlete_model(club_id, name).into_active_model(),
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
