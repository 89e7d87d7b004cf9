//! Test fixtures for database records.
//!
//! `factory` builds in-memory models with standard test values. The remaining
//! submodules insert those models through [`TestSetup`](crate::TestSetup)
//! accessors such as `test.club()` and `test.account()`.

pub mod account;
pub mod athlete;
pub mod club;
pub mod coach;
pub mod factory;
pub mod organizer;
