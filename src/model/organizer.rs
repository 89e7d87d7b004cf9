use chrono::NaiveDate;
use entity::sea_orm_active_enums::ActiveStatus;
use serde::{Deserialize, Serialize};

use crate::model::club::ClubDto;

/// An organizer together with a snapshot of the club it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrganizerDto {
    pub id: String,
    pub name: String,
    pub position: String,
    pub club: Option<ClubDto>,
    pub register_date: NaiveDate,
    pub phone_number: String,
    #[schema(value_type = String)]
    pub active: ActiveStatus,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateOrganizerDto {
    pub name: String,
    pub position: String,
    pub club_id: String,
    pub register_date: String,
    pub phone_number: String,
    pub active: String,
    pub email: String,
}

/// Body of `PUT /v1/organizer`. The owning club cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UpdateOrganizerDto {
    pub id: String,
    pub name: String,
    pub position: String,
    pub register_date: String,
    pub phone_number: String,
    pub active: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrganizerListDto {
    pub total: usize,
    pub organizers: Vec<OrganizerDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedOrganizerDto {
    pub organizer: OrganizerDto,
}
