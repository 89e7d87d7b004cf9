//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't touch the database, suitable for
//! unit tests and as the starting point of the insert fixtures.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ActiveStatus, Gender};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Create a mock club model with the provided name.
pub fn mock_club_model(name: &str) -> entity::club::Model {
    entity::club::Model {
        id: new_id(),
        name: name.to_string(),
        country: "Indonesia".to_string(),
        province: "Jawa Barat".to_string(),
        district: "Bandung".to_string(),
        establish_date: date(2001, 5, 17),
        logo: "https://example.com/logo.png".to_string(),
        address: "Jl. Merdeka No. 1".to_string(),
        email_pic: "pic@example.com".to_string(),
        pic: "Budi".to_string(),
        discipline: "Swimming".to_string(),
        phone_number: "081234567890".to_string(),
        active: ActiveStatus::True,
    }
}

/// Create a mock organizer model belonging to `club_id`.
pub fn mock_organizer_model(club_id: &str, name: &str) -> entity::organizer::Model {
    entity::organizer::Model {
        id: new_id(),
        club_id: club_id.to_string(),
        name: name.to_string(),
        position: "Treasurer".to_string(),
        register_date: date(2020, 1, 10),
        phone_number: "081200000001".to_string(),
        active: ActiveStatus::Unknown,
        email: "organizer@example.com".to_string(),
    }
}

/// Create a mock athlete model belonging to `club_id`.
pub fn mock_athlete_model(club_id: &str, name: &str) -> entity::athlete::Model {
    entity::athlete::Model {
        id: new_id(),
        club_id: club_id.to_string(),
        name: name.to_string(),
        dob: date(2005, 8, 21),
        phone_number: "081200000002".to_string(),
        gender: Gender::Female,
        email: "athlete@example.com".to_string(),
        register_date: date(2021, 3, 1),
        active: ActiveStatus::True,
    }
}

/// Create a mock coach model.
pub fn mock_coach_model(name: &str) -> entity::coach::Model {
    entity::coach::Model {
        id: new_id(),
        name: name.to_string(),
        dob: "1980-02-14".to_string(),
        phone_number: "081200000003".to_string(),
        gender: Gender::Male,
        email: "coach@example.com".to_string(),
        discipline: "Swimming".to_string(),
        register_date: date(2019, 6, 30),
        active: ActiveStatus::Unknown,
    }
}

/// Create a mock account model with the provided credentials.
pub fn mock_account_model(email: &str, password: &str) -> entity::account::Model {
    entity::account::Model {
        id: new_id(),
        name: "Test Account".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}
