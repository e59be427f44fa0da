//! Achievement entity model and DTOs.

use portfolio_core::image_ref::HasImage;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new achievement.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateAchievement {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// DTO for updating an existing achievement. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAchievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl HasImage for Achievement {
    fn image(&self) -> &str {
        &self.image
    }

    fn image_mut(&mut self) -> &mut String {
        &mut self.image
    }
}
