//! Server application models.
//!
//! Application state shared by handlers and the database model aliases used by
//! repositories and services.

pub mod app;
pub mod db;
