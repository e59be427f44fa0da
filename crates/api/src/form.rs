//! Multipart form parsing for content resources.
//!
//! Create and update requests arrive as `multipart/form-data` with text
//! fields plus an optional file in the `image` field.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// Name of the file field carrying an uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Name of the text field carrying an image URL.
pub const IMAGE_URL_FIELD: &str = "imageUrl";

/// A file received in the `image` field.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub data: Bytes,
}

/// Collected text fields and optional upload of one request.
#[derive(Debug, Default)]
pub struct ContentForm {
    fields: HashMap<String, String>,
    pub upload: Option<Upload>,
}

impl ContentForm {
    /// Drain a multipart stream. Unknown fields are kept but ignored by
    /// handlers; an `image` part with no file name and no bytes is treated
    /// as "no file chosen".
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            if name == IMAGE_FIELD && field.file_name().is_some() {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !(file_name.is_empty() && data.is_empty()) {
                    form.upload = Some(Upload { file_name, data });
                }
                continue;
            }

            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.fields.insert(name, text);
        }

        Ok(form)
    }

    /// Build a form directly from text fields.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            upload: None,
        }
    }

    /// Text field as submitted, if present.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// Text field, or an empty string when absent.
    pub fn text_or_empty(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.fields.get(IMAGE_URL_FIELD).map(String::as_str)
    }
}
