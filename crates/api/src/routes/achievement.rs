//! Route definitions for the `/achievements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::achievement;
use crate::state::AppState;

/// Routes mounted at `/achievements`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(achievement::list).post(achievement::create))
        .route("/{id}", put(achievement::update).delete(achievement::delete))
}
