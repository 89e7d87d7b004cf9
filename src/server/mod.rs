//! Server application core modules.
//!
//! HTTP routing and handlers, request validation, business services and the
//! repositories that persist clubs, organizers, athletes, coaches and accounts.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validation;
