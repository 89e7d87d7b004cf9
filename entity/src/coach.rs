use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{ActiveStatus, Gender};

/// Coach record.
///
/// `dob` is kept as the raw string submitted by the client.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coach")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub dob: String,
    pub phone_number: String,
    pub gender: Gender,
    pub email: String,
    pub discipline: String,
    pub register_date: Date,
    pub active: ActiveStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
