use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::ActiveStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub country: String,
    pub province: String,
    pub district: String,
    pub establish_date: Date,
    pub logo: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub email_pic: String,
    pub pic: String,
    pub discipline: String,
    pub phone_number: String,
    pub active: ActiveStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organizer::Entity")]
    Organizer,
    #[sea_orm(has_many = "super::athlete::Entity")]
    Athlete,
}

impl Related<super::organizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::athlete::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Athlete.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
