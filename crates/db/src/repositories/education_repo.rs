//! Repository for the `education` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

const COLUMNS: &str =
    "id, institution, title, duration, description, image, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education (institution, title, duration, description, image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.institution)
            .bind(&input.title)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Partial update; `None` fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                institution = COALESCE($2, institution),
                title = COALESCE($3, title),
                duration = COALESCE($4, duration),
                description = COALESCE($5, description),
                image = COALESCE($6, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.institution)
            .bind(&input.title)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID, returning the image reference it held.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("DELETE FROM education WHERE id = $1 RETURNING image")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
