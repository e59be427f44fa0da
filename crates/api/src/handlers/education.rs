//! Handlers for the `/education` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::education::{CreateEducation, Education, UpdateEducation};
use portfolio_db::repositories::EducationRepo;

use crate::content;
use crate::error::AppResult;
use crate::form::ContentForm;
use crate::origin::RequestOrigin;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /education
pub async fn list(State(state): State<AppState>, origin: RequestOrigin) -> Json<Vec<Education>> {
    let result = EducationRepo::list(&state.pool).await;
    Json(content::listed(&state.media, &origin, "Education", result))
}

/// POST /education
pub async fn create(
    State(state): State<AppState>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Education>)> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = CreateEducation {
        institution: form.text_or_empty("institution"),
        title: form.text_or_empty("title"),
        duration: form.text_or_empty("duration"),
        description: form.text_or_empty("description"),
        image: source.clone().into_create_value(),
    };

    let mut entry = match EducationRepo::create(&state.pool, &input).await {
        Ok(entry) => entry,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    tracing::info!(id = entry.id, "Education entry created");
    content::render_one(&state.media, &origin, &mut entry);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /education/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<Json<Option<Education>>> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = UpdateEducation {
        institution: form.text("institution"),
        title: form.text("title"),
        duration: form.text("duration"),
        description: form.text("description"),
        image: source.clone().into_update_value(),
    };

    let previous = if input.image.is_some() {
        EducationRepo::find_by_id(&state.pool, id)
            .await
            .ok()
            .flatten()
            .map(|e| e.image)
    } else {
        None
    };

    let updated = match EducationRepo::update(&state.pool, id, &input).await {
        Ok(updated) => updated,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    let Some(mut entry) = updated else {
        tracing::warn!(id, "Update of missing education entry");
        content::discard_upload(&state.media, &source).await;
        return Ok(Json(None));
    };

    content::cleanup_replaced(&state.pool, &state.media, previous, &entry.image).await;
    content::render_one(&state.media, &origin, &mut entry);
    Ok(Json(Some(entry)))
}

/// DELETE /education/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if let Some(image) = EducationRepo::delete(&state.pool, id).await? {
        content::release_media(&state.pool, &state.media, &image).await;
    }
    Ok(Json(SuccessResponse::ok()))
}
