//! Handler for `POST /admin/verify`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /admin/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub password: String,
}

/// POST /admin/verify
///
/// Stateless comparison against `ADMIN_PASSWORD`; nothing is issued on
/// success. A body that is not JSON counts as a wrong password.
pub async fn verify(
    State(state): State<AppState>,
    input: Result<Json<VerifyRequest>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let password = match input {
        Ok(Json(input)) => input.password,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable admin verify body");
            String::new()
        }
    };

    match state.admin.verify(&password) {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())),
        Err(e) => {
            tracing::warn!(error = %e, "Admin verification failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(SuccessResponse::failure(
                    portfolio_core::admin::WRONG_PASSWORD,
                )),
            )
        }
    }
}
