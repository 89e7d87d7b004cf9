use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn coach<'a>(&'a self) -> CoachFixtures<'a> {
        CoachFixtures { setup: self }
    }
}

pub struct CoachFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CoachFixtures<'a> {
    pub async fn insert_mock_coach(&self, name: &str) -> Result<entity::coach::Model, TestError> {
        Ok(
            entity::prelude::Coach::insert(factory::mock_coach_model(name).into_active_model())
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }
}
