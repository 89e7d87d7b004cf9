//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP controllers and the repositories. They generate
//! identifiers, run request validation, perform the existence check that precedes
//! updates and deletes, merge update requests into stored records and map records
//! to response DTOs. Each step is its own database round trip, only the token
//! replacement of sign-in runs inside a transaction.

pub mod account;
pub mod athlete;
pub mod auth;
pub mod club;
pub mod coach;
pub mod organizer;

use uuid::Uuid;

/// Generates the identifier of a new record.
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Picks the request value when supplied, otherwise keeps the stored one.
fn merge(stored: String, requested: String) -> String {
    if requested.is_empty() {
        stored
    } else {
        requested
    }
}
