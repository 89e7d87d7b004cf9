//! Extractors shared by controllers.

pub mod json;
pub mod query;
