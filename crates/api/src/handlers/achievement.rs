//! Handlers for the `/achievements` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::achievement::{Achievement, CreateAchievement, UpdateAchievement};
use portfolio_db::repositories::AchievementRepo;

use crate::content;
use crate::error::AppResult;
use crate::form::ContentForm;
use crate::origin::RequestOrigin;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /achievements
///
/// Newest first, image references rendered as absolute URLs.
pub async fn list(State(state): State<AppState>, origin: RequestOrigin) -> Json<Vec<Achievement>> {
    let result = AchievementRepo::list(&state.pool).await;
    Json(content::listed(&state.media, &origin, "Achievement", result))
}

/// POST /achievements
///
/// Multipart fields: `title`, `description`, optional `imageUrl`, optional
/// file `image`.
pub async fn create(
    State(state): State<AppState>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Achievement>)> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = CreateAchievement {
        title: form.text_or_empty("title"),
        description: form.text_or_empty("description"),
        image: source.clone().into_create_value(),
    };

    let mut achievement = match AchievementRepo::create(&state.pool, &input).await {
        Ok(achievement) => achievement,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    tracing::info!(id = achievement.id, "Achievement created");
    content::render_one(&state.media, &origin, &mut achievement);
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// PUT /achievements/{id}
///
/// Same fields as create; omitted fields keep their stored value. Responds
/// with `null` when no achievement has the given id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<Json<Option<Achievement>>> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = UpdateAchievement {
        title: form.text("title"),
        description: form.text("description"),
        image: source.clone().into_update_value(),
    };

    // Lookup failures only skip cleanup of the old file.
    let previous = match &input.image {
        Some(_) => AchievementRepo::find_by_id(&state.pool, id)
            .await
            .ok()
            .flatten()
            .map(|a| a.image),
        None => None,
    };

    let updated = match AchievementRepo::update(&state.pool, id, &input).await {
        Ok(updated) => updated,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    let Some(mut achievement) = updated else {
        tracing::warn!(id, "Update of missing achievement");
        content::discard_upload(&state.media, &source).await;
        return Ok(Json(None));
    };

    content::cleanup_replaced(&state.pool, &state.media, previous, &achievement.image).await;
    content::render_one(&state.media, &origin, &mut achievement);
    Ok(Json(Some(achievement)))
}

/// DELETE /achievements/{id}
///
/// Reports success whether or not the achievement existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    match AchievementRepo::delete(&state.pool, id).await? {
        Some(image) => content::release_media(&state.pool, &state.media, &image).await,
        None => tracing::debug!(id, "Delete of missing achievement"),
    }
    Ok(Json(SuccessResponse::ok()))
}
