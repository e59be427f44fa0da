pub mod achievement;
pub mod admin;
pub mod contact;
pub mod education;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the content, admin, and contact route tree.
///
/// Route hierarchy:
///
/// ```text
/// /achievements                list, create (multipart)
/// /achievements/{id}           update (multipart), delete
///
/// /projects                    list, create (multipart)
/// /projects/{id}               update (multipart), delete
///
/// /education                   list, create (multipart)
/// /education/{id}              update (multipart), delete
///
/// /admin/verify                password check (POST)
///
/// /send                        contact form relay (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/achievements", achievement::router())
        .nest("/projects", project::router())
        .nest("/education", education::router())
        .nest("/admin", admin::router())
        .merge(contact::router())
}
