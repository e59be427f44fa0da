//! Image handling shared by the achievement, project, and education handlers.
//!
//! Each handler parses its own text fields; everything touching the media
//! store (upload precedence, URL rendering, cleanup) goes through here so
//! the three resource kinds behave identically.

use portfolio_core::image_ref::{self, HasImage, ImageSource};
use portfolio_core::media_store::MediaStore;
use portfolio_db::repositories::MediaRefRepo;
use portfolio_db::DbPool;

use crate::error::AppResult;
use crate::form::ContentForm;
use crate::origin::RequestOrigin;

/// Decide the image for a write request.
///
/// An uploaded file is written to the media store first and always wins;
/// otherwise a non-empty `imageUrl` is taken, with URLs into the media
/// store (such as a previously rendered `image`) reduced to the stored name.
pub async fn image_source(
    media: &MediaStore,
    origin: &RequestOrigin,
    form: &ContentForm,
) -> AppResult<ImageSource> {
    let stored = match &form.upload {
        Some(upload) => Some(media.store(&upload.data, &upload.file_name).await?),
        None => None,
    };
    let image_url = form
        .image_url()
        .map(|url| media.normalize(origin.as_str(), url));
    Ok(ImageSource::select(stored, image_url.as_deref()))
}

/// Render one resource's image for a response.
pub fn render_one<T: HasImage>(media: &MediaStore, origin: &RequestOrigin, item: &mut T) {
    let rendered = media.render(origin.as_str(), item.image());
    *item.image_mut() = rendered;
}

/// Turn a list query result into a response body.
///
/// Read failures degrade to an empty list; the error is logged, not surfaced.
pub fn listed<T: HasImage>(
    media: &MediaStore,
    origin: &RequestOrigin,
    entity: &'static str,
    result: Result<Vec<T>, sqlx::Error>,
) -> Vec<T> {
    let mut items = result.unwrap_or_else(|e| {
        tracing::error!(entity, error = %e, "List query failed, returning empty list");
        Vec::new()
    });
    image_ref::render_all(&mut items, origin.as_str(), media.public_prefix());
    items
}

/// Remove a stored file no row references any more.
///
/// Runs after the row that held `reference` was deleted or changed. The
/// file stays when another row still stores the same name, or when that
/// cannot be checked. Failures are logged only.
pub async fn release_media(pool: &DbPool, media: &MediaStore, reference: &str) {
    if !image_ref::is_local(reference) {
        return;
    }
    match MediaRefRepo::is_referenced(pool, reference).await {
        Ok(false) => remove_file(media, reference).await,
        Ok(true) => tracing::debug!(reference, "Media file still referenced, keeping it"),
        Err(e) => tracing::warn!(reference, error = %e, "Reference check failed, keeping media file"),
    }
}

/// Remove the file written for this request, if any, after the row write
/// did not go through. Nothing else can reference a name generated for this
/// request.
pub async fn discard_upload(media: &MediaStore, source: &ImageSource) {
    if let Some(name) = source.stored_upload() {
        remove_file(media, name).await;
    }
}

/// Release the previous image once an update has replaced it.
pub async fn cleanup_replaced(
    pool: &DbPool,
    media: &MediaStore,
    previous: Option<String>,
    current: &str,
) {
    if let Some(previous) = previous {
        if previous != current {
            release_media(pool, media, &previous).await;
        }
    }
}

async fn remove_file(media: &MediaStore, reference: &str) {
    if let Err(e) = media.remove(reference).await {
        tracing::warn!(reference, error = %e, "Failed to remove media file");
    }
}
