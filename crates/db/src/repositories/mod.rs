//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod education_repo;
pub mod media_ref_repo;
pub mod project_repo;

pub use achievement_repo::AchievementRepo;
pub use education_repo::EducationRepo;
pub use media_ref_repo::MediaRefRepo;
pub use project_repo::ProjectRepo;
