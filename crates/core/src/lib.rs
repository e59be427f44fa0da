//! Domain building blocks shared by the database, mail, and API crates.

pub mod admin;
pub mod error;
pub mod image_ref;
pub mod media_store;
pub mod types;
