use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact relay route, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/send", post(contact::send))
}
