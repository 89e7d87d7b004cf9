use sea_orm::DatabaseConnection;

use crate::{
    model::athlete::{AthleteDto, CreateAthleteDto, UpdateAthleteDto},
    server::{
        data::athlete::AthleteRepository,
        error::{request::RequestError, Error},
        model::db::AthleteModel,
        service::{merge, new_id},
        validation::{self, present, require_id, update_gender, FieldReport},
    },
};

/// Service for managing athletes.
pub struct AthleteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AthleteService<'a> {
    /// Creates a new instance of [`AthleteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new athlete under the requested club.
    pub async fn create(&self, dto: CreateAthleteDto) -> Result<String, Error> {
        let athlete = validation::athlete::validate_create(new_id(), dto)?;

        Ok(AthleteRepository::new(self.db).create(athlete).await?)
    }

    pub async fn list(&self, ids: &[String]) -> Result<Vec<AthleteDto>, Error> {
        let athletes = AthleteRepository::new(self.db).get(ids).await?;

        Ok(athletes.into_iter().map(AthleteDto::from).collect())
    }

    /// Replaces the stored athlete with the request.
    ///
    /// Both dates must be supplied. An empty `active` resets it to `UNKNOWN`; an
    /// empty `gender` or `club_id` keeps the stored value.
    pub async fn update(&self, dto: UpdateAthleteDto) -> Result<AthleteDto, Error> {
        let athlete_repo = AthleteRepository::new(self.db);
        let id = require_id(&dto.id)?.to_string();

        let mut report = FieldReport::new();
        let dob = report.require_date("dob", &dto.dob);
        let register_date = report.require_date("register_date", &dto.register_date);
        let active = report.optional_active(&dto.active);
        report.finish()?;
        let gender = update_gender("gender", &dto.gender)?;

        let stored = athlete_repo
            .get(&[id.clone()])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        let athlete = AthleteModel {
            id: id.clone(),
            club_id: merge(stored.club_id, dto.club_id),
            name: dto.name,
            dob: present("dob", dob)?,
            phone_number: dto.phone_number,
            gender: gender.unwrap_or(stored.gender),
            email: dto.email,
            register_date: present("register_date", register_date)?,
            active,
        };

        athlete_repo.update(athlete).await?;

        let updated = athlete_repo
            .get(&[id])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let athlete_repo = AthleteRepository::new(self.db);
        let id = require_id(id)?;

        if athlete_repo.get(&[id.to_string()]).await?.is_empty() {
            return Err(RequestError::WrongId.into());
        }

        athlete_repo.delete(id).await?;

        Ok(())
    }
}
