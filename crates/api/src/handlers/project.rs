//! Handlers for the `/projects` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{CreateProject, Project, UpdateProject};
use portfolio_db::repositories::ProjectRepo;

use crate::content;
use crate::error::AppResult;
use crate::form::ContentForm;
use crate::origin::RequestOrigin;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /projects
///
/// Newest first, image references rendered as absolute URLs.
pub async fn list(State(state): State<AppState>, origin: RequestOrigin) -> Json<Vec<Project>> {
    let result = ProjectRepo::list(&state.pool).await;
    Json(content::listed(&state.media, &origin, "Project", result))
}

/// POST /projects
///
/// Multipart fields: `title`, `description`, `link`, optional `imageUrl`,
/// optional file `image`.
pub async fn create(
    State(state): State<AppState>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Project>)> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = CreateProject {
        title: form.text_or_empty("title"),
        description: form.text_or_empty("description"),
        link: form.text_or_empty("link"),
        image: source.clone().into_create_value(),
    };

    let mut project = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => project,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    tracing::info!(id = project.id, "Project created");
    content::render_one(&state.media, &origin, &mut project);
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /projects/{id}
///
/// Same fields as create; omitted fields keep their stored value. Responds
/// with `null` when no project has the given id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    origin: RequestOrigin,
    multipart: Multipart,
) -> AppResult<Json<Option<Project>>> {
    let form = ContentForm::from_multipart(multipart).await?;
    let source = content::image_source(&state.media, &origin, &form).await?;

    let input = UpdateProject {
        title: form.text("title"),
        description: form.text("description"),
        link: form.text("link"),
        image: source.clone().into_update_value(),
    };

    // Lookup failures only skip cleanup of the old file.
    let previous = match &input.image {
        Some(_) => ProjectRepo::find_by_id(&state.pool, id)
            .await
            .ok()
            .flatten()
            .map(|p| p.image),
        None => None,
    };

    let updated = match ProjectRepo::update(&state.pool, id, &input).await {
        Ok(updated) => updated,
        Err(e) => {
            content::discard_upload(&state.media, &source).await;
            return Err(e.into());
        }
    };

    let Some(mut project) = updated else {
        tracing::warn!(id, "Update of missing project");
        content::discard_upload(&state.media, &source).await;
        return Ok(Json(None));
    };

    content::cleanup_replaced(&state.pool, &state.media, previous, &project.image).await;
    content::render_one(&state.media, &origin, &mut project);
    Ok(Json(Some(project)))
}

/// DELETE /projects/{id}
///
/// Reports success whether or not the project existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    match ProjectRepo::delete(&state.pool, id).await? {
        Some(image) => content::release_media(&state.pool, &state.media, &image).await,
        None => tracing::debug!(id, "Delete of missing project"),
    }
    Ok(Json(SuccessResponse::ok()))
}
