//! HTTP-level integration tests for the instructor course endpoints:
//! CRUD, ownership enforcement, and publish gating.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, get_anon, patch_json, post_empty, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Auth gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn requests_without_token_are_rejected(pool: PgPool) {
    let response = get_anon(common::build_test_app(pool), "/api/v1/courses").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_course_returns_201(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/courses",
        "instructor_1",
        serde_json::json!({ "title": "Rust 101" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Rust 101");
    assert_eq!(json["owner_id"], "instructor_1");
    assert_eq!(json["is_published"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_course_with_empty_title_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/courses",
        "instructor_1",
        serde_json::json!({ "title": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_course_includes_chapters_and_attachments(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Detailed").await;
    common::create_chapter(&pool, "instructor_1", id, "Ch 1").await;
    post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}/attachments"),
        "instructor_1",
        serde_json::json!({ "url": "https://files.example.com/a/syllabus.pdf" }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["course"]["title"], "Detailed");
    assert_eq!(json["chapters"].as_array().unwrap().len(), 1);
    assert_eq!(json["attachments"][0]["name"], "syllabus.pdf");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_gets_403(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Mine").await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}"),
        "instructor_2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_2",
        serde_json::json!({ "title": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_course_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/courses/999999",
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_applies_partial_fields(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Original").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
        serde_json::json!({ "description": "Now with a description", "price_cents": 4999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Original");
    assert_eq!(json["description"], "Now with a description");
    assert_eq!(json["price_cents"], 4999);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_unknown_category_returns_400(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Categorised").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
        serde_json::json!({ "category_id": 424242 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_course_returns_204_then_404(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Doomed").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_own_courses_excludes_other_instructors(pool: PgPool) {
    common::create_course(&pool, "instructor_1", "Mine A").await;
    common::create_course(&pool, "instructor_1", "Mine B").await;
    common::create_course(&pool, "instructor_2", "Theirs").await;

    let response = get(common::build_test_app(pool), "/api/v1/courses", "instructor_1").await;
    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(!titles.contains(&"Theirs"));
}

// ---------------------------------------------------------------------------
// Publish gating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_incomplete_course_returns_400_with_missing_fields(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Bare").await;

    let response = post_empty(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}/publish"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("description"));
    assert!(message.contains("image"));
    assert!(message.contains("category"));
    assert!(message.contains("published_chapter"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_complete_course_succeeds(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Complete").await;
    common::publish_course(&pool, "instructor_1", id).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}"),
        "instructor_1",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["course"]["is_published"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unpublish_hides_course_from_students(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Fleeting").await;
    common::publish_course(&pool, "instructor_1", id).await;

    let response = post_empty(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}/unpublish"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/browse/courses/{id}"),
        "student_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn attachment_lifecycle(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Files").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}/attachments"),
        "instructor_1",
        serde_json::json!({ "url": "https://files.example.com/uploads/notes.pdf?v=2" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let attachment = body_json(response).await;
    assert_eq!(attachment["name"], "notes.pdf");
    let attachment_id = attachment["id"].as_i64().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{id}/attachments/{attachment_id}"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}/attachments/{attachment_id}"),
        "instructor_1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn attachment_with_invalid_url_returns_400(pool: PgPool) {
    let id = common::create_course(&pool, "instructor_1", "Files").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{id}/attachments"),
        "instructor_1",
        serde_json::json!({ "url": "not a url" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
