//! HTTP-level integration tests for the content resources.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, delete, get, multipart, TEST_HOST, TEST_ORIGIN};
use sqlx::PgPool;

fn uploads_url() -> String {
    format!("{TEST_ORIGIN}/uploads/")
}

/// Stored file name from a rendered local image URL.
fn stored_name(image: &str) -> &str {
    image.rsplit('/').next().unwrap()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_with_file_returns_static_url(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());

    let response = multipart(
        app,
        Method::POST,
        "/projects",
        &[("title", "Demo"), ("description", "d"), ("link", "http://x")],
        Some(("image", "photo.png", b"\x89PNG fake")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Demo");
    assert_eq!(json["description"], "d");
    assert_eq!(json["link"], "http://x");
    assert!(json["id"].is_number());
    assert!(json["createdAt"].is_string());

    let image = json["image"].as_str().unwrap();
    assert!(image.starts_with(&uploads_url()), "got {image}");
    assert!(image.ends_with(".png"), "got {image}");
    assert!(dir.path().join(stored_name(image)).exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_file_wins_over_image_url(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());

    let response = multipart(
        app,
        Method::POST,
        "/projects",
        &[("title", "Both"), ("imageUrl", "https://cdn.example.com/x.jpg")],
        Some(("image", "shot.jpg", b"jpeg")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let image = json["image"].as_str().unwrap();
    assert!(image.starts_with(&uploads_url()), "got {image}");
    assert!(image.ends_with(".jpg"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn image_url_is_passed_through_on_create_and_list(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let url = "https://cdn.example.com/x.jpg";

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = multipart(
        app,
        Method::POST,
        "/projects",
        &[("title", "Remote"), ("imageUrl", url)],
        None,
    )
    .await;
    assert_eq!(body_json(response).await["image"], url);

    let app = common::build_test_app(pool, dir.path());
    let json = body_json(get(app, "/projects").await).await;
    assert_eq!(json[0]["image"], url);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn project_without_image_or_link_stores_empty_strings(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());

    let response = multipart(app, Method::POST, "/projects", &[("title", "Bare")], None).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["image"], "");
    assert_eq!(json["link"], "");
    assert_eq!(json["description"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_projects_newest_first(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    for title in ["P1", "P2"] {
        let app = common::build_test_app(pool.clone(), dir.path());
        multipart(app, Method::POST, "/projects", &[("title", title)], None).await;
    }

    let app = common::build_test_app(pool, dir.path());
    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["P2", "P1"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_on_empty_collection_is_empty_array(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    for uri in ["/projects", "/achievements", "/education"] {
        let app = common::build_test_app(pool.clone(), dir.path());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_project_keeps_omitted_fields(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Original"), ("description", "keep me"), ("link", "http://x")],
            None,
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, dir.path());
    let response = multipart(
        app,
        Method::PUT,
        &format!("/projects/{id}"),
        &[("title", "Updated")],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Updated");
    assert_eq!(json["description"], "keep me");
    assert_eq!(json["link"], "http://x");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_new_upload_removes_previous_file(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Pic")],
            Some(("image", "old.png", b"old")),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let old_name = stored_name(created["image"].as_str().unwrap()).to_string();
    assert!(dir.path().join(&old_name).exists());

    let app = common::build_test_app(pool, dir.path());
    let updated = body_json(
        multipart(
            app,
            Method::PUT,
            &format!("/projects/{id}"),
            &[],
            Some(("image", "new.webp", b"new")),
        )
        .await,
    )
    .await;

    let new_name = stored_name(updated["image"].as_str().unwrap());
    assert!(new_name.ends_with(".webp"));
    assert!(dir.path().join(new_name).exists());
    assert!(!dir.path().join(&old_name).exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_project_returns_null(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, dir.path());

    let response = multipart(
        app,
        Method::PUT,
        "/projects/999999",
        &[("title", "Ghost")],
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_existing_and_missing_project_return_same_body(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Delete Me")],
            Some(("image", "gone.png", b"x")),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let name = stored_name(created["image"].as_str().unwrap()).to_string();

    let app = common::build_test_app(pool.clone(), dir.path());
    let existing = delete(app, &format!("/projects/{id}")).await;
    assert_eq!(existing.status(), StatusCode::OK);
    let existing = body_json(existing).await;

    let app = common::build_test_app(pool.clone(), dir.path());
    let missing = delete(app, &format!("/projects/{id}")).await;
    assert_eq!(missing.status(), StatusCode::OK);
    let missing = body_json(missing).await;

    assert_eq!(existing, serde_json::json!({"success": true}));
    assert_eq!(existing, missing);
    assert!(!dir.path().join(&name).exists());

    let app = common::build_test_app(pool, dir.path());
    assert_eq!(body_json(get(app, "/projects").await).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_file_is_served_statically(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/achievements",
            &[("title", "Served")],
            Some(("image", "badge.png", b"badge-bytes")),
        )
        .await,
    )
    .await;
    let name = stored_name(created["image"].as_str().unwrap()).to_string();

    let app = common::build_test_app(pool, dir.path());
    let response = get(app, &format!("/uploads/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"badge-bytes");
}

// ---------------------------------------------------------------------------
// Shared media files
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn resending_rendered_image_url_keeps_the_file(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Edit me")],
            Some(("image", "photo.png", b"keep")),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let rendered = created["image"].as_str().unwrap().to_string();
    let name = stored_name(&rendered).to_string();

    let app = common::build_test_app(pool.clone(), dir.path());
    let updated = body_json(
        multipart(
            app,
            Method::PUT,
            &format!("/projects/{id}"),
            &[("title", "Edited"), ("imageUrl", rendered.as_str())],
            None,
        )
        .await,
    )
    .await;

    assert_eq!(updated["title"], "Edited");
    assert_eq!(updated["image"], rendered.as_str());
    assert!(dir.path().join(&name).exists());

    let app = common::build_test_app(pool, dir.path());
    let response = get(app, &format!("/uploads/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"keep");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_one_row_keeps_a_file_another_row_uses(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let project = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Owner")],
            Some(("image", "x.png", b"shared")),
        )
        .await,
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();
    let name = stored_name(project["image"].as_str().unwrap()).to_string();

    let app = common::build_test_app(pool.clone(), dir.path());
    let achievement = body_json(
        multipart(
            app,
            Method::POST,
            "/achievements",
            &[("title", "Borrower"), ("imageUrl", name.as_str())],
            None,
        )
        .await,
    )
    .await;
    let achievement_id = achievement["id"].as_i64().unwrap();
    assert_eq!(achievement["image"], project["image"]);

    let app = common::build_test_app(pool.clone(), dir.path());
    delete(app, &format!("/achievements/{achievement_id}")).await;
    assert!(dir.path().join(&name).exists());

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = get(app, &format!("/uploads/{name}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Last reference gone: the file goes with it.
    let app = common::build_test_app(pool, dir.path());
    delete(app, &format!("/projects/{project_id}")).await;
    assert!(!dir.path().join(&name).exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn replacing_an_image_keeps_a_file_another_row_uses(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    let project = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Owner")],
            Some(("image", "x.png", b"shared")),
        )
        .await,
    )
    .await;
    let rendered = project["image"].as_str().unwrap().to_string();
    let name = stored_name(&rendered).to_string();

    let app = common::build_test_app(pool.clone(), dir.path());
    let entry = body_json(
        multipart(
            app,
            Method::POST,
            "/education",
            &[("institution", "Uni"), ("imageUrl", rendered.as_str())],
            None,
        )
        .await,
    )
    .await;
    let entry_id = entry["id"].as_i64().unwrap();

    let app = common::build_test_app(pool, dir.path());
    let updated = body_json(
        multipart(
            app,
            Method::PUT,
            &format!("/education/{entry_id}"),
            &[],
            Some(("image", "new.png", b"new")),
        )
        .await,
    )
    .await;

    assert_ne!(updated["image"], rendered.as_str());
    assert!(dir.path().join(&name).exists());
}

// ---------------------------------------------------------------------------
// Origin-dependent rendering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn forwarded_headers_decide_the_rendered_origin(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), dir.path());
    multipart(
        app,
        Method::POST,
        "/projects",
        &[("title", "Proxied")],
        Some(("image", "shot.png", b"x")),
    )
    .await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header("host", TEST_HOST)
        .header("x-forwarded-proto", "https")
        .header("x-forwarded-host", "site.example")
        .body(Body::empty())
        .unwrap();
    let app = common::build_test_app(pool, dir.path());
    let json = body_json(common::send(app, request).await).await;

    let image = json[0]["image"].as_str().unwrap();
    assert!(image.starts_with("https://site.example/uploads/"), "got {image}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_url_overrides_request_headers(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::test_config(dir.path());
    config.public_url = Some("https://cdn.site.test".to_string());

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let created = body_json(
        multipart(
            app,
            Method::POST,
            "/projects",
            &[("title", "Pinned")],
            Some(("image", "shot.png", b"x")),
        )
        .await,
    )
    .await;
    let image = created["image"].as_str().unwrap();
    assert!(image.starts_with("https://cdn.site.test/uploads/"), "got {image}");

    let app = common::build_test_app_with_config(pool, config);
    let json = body_json(get(app, "/projects").await).await;
    assert_eq!(json[0]["image"], image);
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn achievement_lifecycle(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = multipart(
        app,
        Method::POST,
        "/achievements",
        &[("title", "Hackathon"), ("description", "First place")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["title"], "Hackathon");
    assert_eq!(created["description"], "First place");
    assert_eq!(created["image"], "");
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let updated = body_json(
        multipart(
            app,
            Method::PUT,
            &format!("/achievements/{id}"),
            &[("imageUrl", "https://img.example.com/trophy.png")],
            None,
        )
        .await,
    )
    .await;
    assert_eq!(updated["image"], "https://img.example.com/trophy.png");
    assert_eq!(updated["title"], "Hackathon");

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = delete(app, &format!("/achievements/{id}")).await;
    assert_eq!(body_json(response).await["success"], true);

    let app = common::build_test_app(pool, dir.path());
    assert_eq!(
        body_json(get(app, "/achievements").await).await,
        serde_json::json!([])
    );
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn education_list_renders_local_images(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();

    let app = common::build_test_app(pool.clone(), dir.path());
    let response = multipart(
        app,
        Method::POST,
        "/education",
        &[
            ("institution", "State University"),
            ("title", "BSc Computer Science"),
            ("duration", "2018 - 2022"),
            ("description", "Graduated with honours"),
        ],
        Some(("image", "logo.svg", b"<svg/>")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool, dir.path());
    let json = body_json(get(app, "/education").await).await;
    let entry = &json[0];
    assert_eq!(entry["institution"], "State University");
    assert_eq!(entry["duration"], "2018 - 2022");
    let image = entry["image"].as_str().unwrap();
    assert!(image.starts_with(&uploads_url()));
    assert!(image.ends_with(".svg"));
}
