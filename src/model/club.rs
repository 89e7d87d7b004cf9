use chrono::NaiveDate;
use entity::sea_orm_active_enums::ActiveStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubDto {
    pub id: String,
    pub name: String,
    pub country: String,
    pub province: String,
    pub district: String,
    pub establish_date: NaiveDate,
    pub logo: String,
    pub address: String,
    pub pic: String,
    pub email_pic: String,
    pub discipline: String,
    pub phone_number: String,
    /// One of `UNKNOWN`, `TRUE` or `FALSE`
    #[schema(value_type = String)]
    pub active: ActiveStatus,
}

impl From<entity::club::Model> for ClubDto {
    fn from(club: entity::club::Model) -> Self {
        Self {
            id: club.id,
            name: club.name,
            country: club.country,
            province: club.province,
            district: club.district,
            establish_date: club.establish_date,
            logo: club.logo,
            address: club.address,
            pic: club.pic,
            email_pic: club.email_pic,
            discipline: club.discipline,
            phone_number: club.phone_number,
            active: club.active,
        }
    }
}

/// Body of `POST /v1/club`; dates are `yyyy-mm-dd` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateClubDto {
    pub name: String,
    pub country: String,
    pub province: String,
    pub district: String,
    pub establish_date: String,
    pub logo: String,
    pub address: String,
    pub pic: String,
    pub email_pic: String,
    pub discipline: String,
    pub phone_number: String,
    pub active: String,
}

/// Body of `PUT /v1/club`; empty fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UpdateClubDto {
    pub id: String,
    pub name: String,
    pub country: String,
    pub province: String,
    pub district: String,
    pub establish_date: String,
    pub logo: String,
    pub address: String,
    pub pic: String,
    pub email_pic: String,
    pub discipline: String,
    pub phone_number: String,
    pub active: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubListDto {
    pub total: usize,
    pub clubs: Vec<ClubDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedClubDto {
    pub club: ClubDto,
}
