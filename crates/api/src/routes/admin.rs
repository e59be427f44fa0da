use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /verify          -> verify
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/verify", post(admin::verify))
}
