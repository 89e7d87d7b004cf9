//! Request and response types exchanged over the HTTP API.

pub mod account;
pub mod api;
pub mod athlete;
pub mod auth;
pub mod club;
pub mod coach;
pub mod organizer;
