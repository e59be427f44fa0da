//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts (missing text fields are empty strings)
//! - An update DTO (all `Option` fields) for partial updates

pub mod achievement;
pub mod education;
pub mod project;
