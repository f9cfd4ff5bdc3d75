//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise
//! the exact middleware stack production uses, and signs real JWTs with
//! the test secret so the auth extractor runs for real.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use courseforge_api::auth::jwt::{generate_access_token, JwtConfig};
use courseforge_api::config::ServerConfig;
use courseforge_api::router::build_app_router;
use courseforge_api::state::AppState;
use courseforge_api::video::DisabledVideoPlatform;

const TEST_JWT_SECRET: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults and the test JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
        video: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a disabled video platform.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        video: Arc::new(DisabledVideoPlatform),
    };
    build_app_router(state, &config)
}

/// A valid bearer token for the given user id.
pub fn token_for(user_id: &str) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user {
        builder = builder.header(
            header::AUTHORIZATION,
            format!("Bearer {}", token_for(user_id)),
        );
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, user: &str) -> Response {
    send(app, Method::GET, uri, Some(user), None).await
}

pub async fn get_anon(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, user: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(user), Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str, user: &str) -> Response {
    send(app, Method::POST, uri, Some(user), None).await
}

pub async fn patch_json(app: Router, uri: &str, user: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(user), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, user: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(user), Some(body)).await
}

pub async fn delete(app: Router, uri: &str, user: &str) -> Response {
    send(app, Method::DELETE, uri, Some(user), None).await
}

/// Deserialize a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

/// Create a draft course owned by `user`, returning its id.
pub async fn create_course(pool: &PgPool, user: &str, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/courses",
        user,
        serde_json::json!({ "title": title }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a draft chapter in `course_id`, returning its id.
pub async fn create_chapter(pool: &PgPool, user: &str, course_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}/chapters"),
        user,
        serde_json::json!({ "title": title }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Fill in a chapter's required fields and publish it.
pub async fn publish_chapter(pool: &PgPool, user: &str, course_id: i64, chapter_id: i64) {
    patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}/chapters/{chapter_id}"),
        user,
        serde_json::json!({
            "description": "Chapter notes",
            "video_url": "https://videos.example.com/raw/clip.mp4",
        }),
    )
    .await;
    post_empty(
        build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}/chapters/{chapter_id}/publish"),
        user,
    )
    .await;
}

/// Fill in a course's required fields, publish one chapter, and publish
/// the course. Returns the published chapter's id.
pub async fn publish_course(pool: &PgPool, user: &str, course_id: i64) -> i64 {
    let category_id = first_category_id(pool, user).await;
    patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}"),
        user,
        serde_json::json!({
            "description": "A complete course",
            "image_url": "https://cdn.example.com/cover.png",
            "category_id": category_id,
            "price_cents": 1999,
        }),
    )
    .await;

    let chapter_id = create_chapter(pool, user, course_id, "Chapter 1").await;
    publish_chapter(pool, user, course_id, chapter_id).await;

    post_empty(
        build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}/publish"),
        user,
    )
    .await;
    chapter_id
}

/// Id of the first seeded category.
pub async fn first_category_id(pool: &PgPool, user: &str) -> i64 {
    let response = get(build_test_app(pool.clone()), "/api/v1/categories", user).await;
    body_json(response).await[0]["id"].as_i64().unwrap()
}
