//! SeaORM entity definitions for the roster database schema.

pub mod prelude;

pub mod account;
pub mod athlete;
pub mod club;
pub mod coach;
pub mod organizer;
pub mod sea_orm_active_enums;
pub mod token;
pub mod verification_code;
