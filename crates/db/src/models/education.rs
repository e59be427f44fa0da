//! Education entity model and DTOs.

use portfolio_core::image_ref::HasImage;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `education` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: DbId,
    pub institution: String,
    pub title: String,
    /// Free-form period, e.g. "2018 - 2022".
    pub duration: String,
    pub description: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new education entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEducation {
    pub institution: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub image: String,
}

/// DTO for updating an existing education entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEducation {
    pub institution: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl HasImage for Education {
    fn image(&self) -> &str {
        &self.image
    }

    fn image_mut(&mut self) -> &mut String {
        &mut self.image
    }
}
