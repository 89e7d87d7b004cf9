use sea_orm::DatabaseConnection;

use crate::{
    model::club::{ClubDto, CreateClubDto, UpdateClubDto},
    server::{
        data::club::ClubRepository,
        error::{request::RequestError, Error},
        service::{merge, new_id},
        validation::{self, require_id, update_active, update_date},
    },
};

/// Service for managing clubs.
pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    /// Creates a new instance of [`ClubService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new club, returning its generated id.
    pub async fn create(&self, dto: CreateClubDto) -> Result<String, Error> {
        let club = validation::club::validate_create(new_id(), dto)?;

        Ok(ClubRepository::new(self.db).create(club).await?)
    }

    /// Lists clubs by id, or every club when `ids` is empty.
    pub async fn list(&self, ids: &[String]) -> Result<Vec<ClubDto>, Error> {
        let clubs = ClubRepository::new(self.db).get(ids).await?;

        Ok(clubs.into_iter().map(ClubDto::from).collect())
    }

    /// Merges the non-empty fields of `dto` into the stored club.
    ///
    /// # Returns
    /// - `Ok(ClubDto)` - The club as stored after the update
    /// - `Err(Error::RequestError)` - Missing or unknown id, invalid `active` or date
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, dto: UpdateClubDto) -> Result<ClubDto, Error> {
        let club_repo = ClubRepository::new(self.db);
        let id = require_id(&dto.id)?.to_string();

        let mut club = club_repo
            .get(&[id.clone()])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        if let Some(active) = update_active(&dto.active)? {
            club.active = active;
        }
        if let Some(establish_date) = update_date("establish_date", &dto.establish_date)? {
            club.establish_date = establish_date;
        }

        club.name = merge(club.name, dto.name);
        club.country = merge(club.country, dto.country);
        club.province = merge(club.province, dto.province);
        club.district = merge(club.district, dto.district);
        club.logo = merge(club.logo, dto.logo);
        club.address = merge(club.address, dto.address);
        club.pic = merge(club.pic, dto.pic);
        club.email_pic = merge(club.email_pic, dto.email_pic);
        club.discipline = merge(club.discipline, dto.discipline);
        club.phone_number = merge(club.phone_number, dto.phone_number);

        club_repo.update(club).await?;

        let updated = club_repo
            .get(&[id])
            .await?
            .into_iter()
            .next()
            .ok_or(RequestError::WrongId)?;

        Ok(updated.into())
    }

    /// Deletes an existing club.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let club_repo = ClubRepository::new(self.db);
        let id = require_id(id)?;

        if club_repo.get(&[id.to_string()]).await?.is_empty() {
            return Err(RequestError::WrongId.into());
        }

        club_repo.delete(id).await?;

        Ok(())
    }
}
