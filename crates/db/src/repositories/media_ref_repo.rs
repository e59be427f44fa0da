//! Cross-table lookups on image references.

use sqlx::PgPool;

/// Queries that span every table with an `image` column.
pub struct MediaRefRepo;

impl MediaRefRepo {
    /// Whether any achievement, project, or education row stores `image`.
    pub async fn is_referenced(pool: &PgPool, image: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM achievements WHERE image = $1)
                 OR EXISTS (SELECT 1 FROM projects WHERE image = $1)
                 OR EXISTS (SELECT 1 FROM education WHERE image = $1)",
        )
        .bind(image)
        .fetch_one(pool)
        .await
    }
}
