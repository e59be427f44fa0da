//! Handler for the contact form relay, `POST /send`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_mail::ContactSubmission;

use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /send
///
/// Composes one email from the submission and hands it to the mailer.
/// Delivery failures become `{ success: false }` with a 500; nothing is
/// retried.
pub async fn send(
    State(state): State<AppState>,
    submission: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<SuccessResponse>) {
    let submission = match submission {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected contact form body");
            return (
                StatusCode::BAD_REQUEST,
                Json(SuccessResponse::failure("Invalid contact form")),
            );
        }
    };

    let Some(relay) = &state.contact else {
        tracing::error!("Contact form submitted but SMTP is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SuccessResponse::failure("Email delivery is not configured")),
        );
    };

    let message = submission.compose(&relay.to);

    match relay.mailer.send(&message).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())),
        Err(e) => {
            tracing::error!(error = %e, reply_to = %message.reply_to, "Failed to send contact email");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SuccessResponse::failure("Failed to send message")),
            )
        }
    }
}
