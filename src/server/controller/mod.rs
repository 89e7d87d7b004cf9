//! HTTP controller endpoints for the roster API.
//!
//! Axum handlers decode the request, delegate to the matching service and wrap the
//! result in the response envelope. Every handler is annotated for utoipa so the
//! router can publish an OpenAPI document.

pub mod account;
pub mod athlete;
pub mod auth;
pub mod club;
pub mod coach;
pub mod organizer;
pub mod util;
