use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ActiveStatus, Gender};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AthleteDto {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub phone_number: String,
    /// Either `MALE` or `FEMALE`
    #[schema(value_type = String)]
    pub gender: Gender,
    pub email: String,
    pub register_date: NaiveDate,
    #[schema(value_type = String)]
    pub active: ActiveStatus,
}

impl From<entity::athlete::Model> for AthleteDto {
    fn from(athlete: entity::athlete::Model) -> Self {
        Self {
            id: athlete.id,
            club_id: athlete.club_id,
            name: athlete.name,
            dob: athlete.dob,
            phone_number: athlete.phone_number,
            gender: athlete.gender,
            email: athlete.email,
            register_date: athlete.register_date,
            active: athlete.active,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateAthleteDto {
    pub club_id: String,
    pub name: String,
    pub dob: String,
    pub phone_number: String,
    pub gender: String,
    pub email: String,
    pub register_date: String,
    pub active: String,
}

/// Body of `PUT /v1/athlete`; replaces every field of the stored athlete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UpdateAthleteDto {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub dob: String,
    pub phone_number: String,
    pub gender: String,
    pub email: String,
    pub register_date: String,
    pub active: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AthleteListDto {
    pub total: usize,
    pub athletes: Vec<AthleteDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedAthleteDto {
    pub athlete: AthleteDto,
}
