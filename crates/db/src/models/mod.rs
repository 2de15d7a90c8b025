//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the aliased row the repository selects
//! - A `Deserialize` create DTO
//! - The validated entity the rest of the application works with

pub mod reservation;
