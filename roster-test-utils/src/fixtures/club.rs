use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn club<'a>(&'a self) -> ClubFixtures<'a> {
        ClubFixtures { setup: self }
    }
}

pub struct ClubFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ClubFixtures<'a> {
    /// Insert a mock club with standard test values and the provided name.
    pub async fn insert_mock_club(&self, name: &str) -> Result<entity::club::Model, TestError> {
        self.insert(factory::mock_club_model(name)).await
    }

    pub async fn insert(
        &self,
        club: entity::club::Model,
    ) -> Result<entity::club::Model, TestError> {
        Ok(entity::prelude::Club::insert(club.into_active_model())
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
