//! Domain rules for Lunchly reservations.
//!
//! Nothing in this crate touches the database; the `lunchly-db` crate builds
//! its model and repository on top of these types and checks.

pub mod error;
pub mod reservation;
pub mod types;
