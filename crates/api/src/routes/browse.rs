//! Route definitions for the student `/browse` surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{browse, player};
use crate::state::AppState;

/// Routes mounted at `/browse`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(browse::search))
        .route("/courses/{course_id}", get(browse::course_view))
        .route("/courses/{course_id}/purchase", post(player::purchase))
        .route(
            "/courses/{course_id}/chapters/{chapter_id}",
            get(player::chapter_view),
        )
        .route(
            "/courses/{course_id}/chapters/{chapter_id}/progress",
            put(player::update_progress),
        )
        .route("/dashboard", get(browse::dashboard))
}
