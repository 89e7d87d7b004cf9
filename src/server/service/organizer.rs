use sea_orm::DatabaseConnection;

use crate::{
    model::{
        club::ClubDto,
        organizer::{CreateOrganizerDto, OrganizerDto, UpdateOrganizerDto},
    },
    server::{
        data::organizer::OrganizerRepository,
        error::{request::RequestError, Error},
        model::db::OrganizerWithClub,
        service::{merge, new_id},
        validation::{self, require_id, update_active, update_date},
    },
};

impl From<OrganizerWithClub> for OrganizerDto {
    fn from(row: OrganizerWithClub) -> Self {
        let OrganizerWithClub { organizer, club } = row;

        Self {
            id: organizer.id,
            name: organizer.name,
            position: organizer.position,
            club: club.map(ClubDto::from),
            register_date: organizer.register_date,
            phone_number: organizer.phone_number,
            active: organizer.active,
            email: organizer.email,
        }
    }
}

/// Service for managing organizers, always read together with their club.
pub struct OrganizerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizerService<'a> {
    /// Creates a new instance of [`OrganizerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new organizer.
    ///
    /// An unknown `club_id` is rejected by the foreign key and surfaces as a
    /// database error.
    pub async fn create(&self, dto: CreateOrganizerDto) -> Result<String, Error> {
        let organizer = validation::organizer::validate_create(new_id(), dto)?;

        Ok(OrganizerRepository::new(self.db).create(organizer).await?)
    }

    pub async fn list(&self, ids: &[String]) -> Result<Vec<OrganizerDto>, Error> {
        let organizers = OrganizerRepository::new(self.db).get(ids).await?;

        Ok(organizers.into_iter().map(OrganizerDto::from).collect())
    }

    /// Merges the non-empty fields of `dto` into the stored organizer.
    ///
    /// The owning club is never changed by an update.
    pub async fn update(&self, dto: UpdateOrganizerDto) -> Result<OrganizerDto, Error> {
        let organizer_repo = OrganizerRepository::new(self.db);
        let id = require_id(&dto.id)?.to_string();

        let mut organizer = organizer_repo
            .get(&[id.clone()])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?
            .organizer;

        if let Some(register_date) = update_date("register_date", &dto.register_date)? {
            organizer.register_date = register_date;
        }
        if let Some(active) = update_active(&dto.active)? {
            organizer.active = active;
        }

        organizer.name = merge(organizer.name, dto.name);
        organizer.position = merge(organizer.position, dto.position);
        organizer.phone_number = merge(organizer.phone_number, dto.phone_number);
        organizer.email = merge(organizer.email, dto.email);

        organizer_repo.update(organizer).await?;

        let updated = organizer_repo
            .get(&[id])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let organizer_repo = OrganizerRepository::new(self.db);
        let id = require_id(id)?;

        if organizer_repo.get(&[id.to_string()]).await?.is_empty() {
            return Err(RequestError::WrongId.into());
        }

        organizer_repo.delete(id).await?;

        Ok(())
    }
}
