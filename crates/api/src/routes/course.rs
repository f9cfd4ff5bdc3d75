//! Route definitions for the instructor `/courses` resource, including
//! nested chapter and attachment routes.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{attachment, chapter, course};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// The static `/chapters/reorder` segment must be registered alongside the
/// `/{chapter_id}` routes; the router prefers the static match.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list_own).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .patch(course::update)
                .delete(course::delete),
        )
        .route("/{id}/publish", post(course::publish))
        .route("/{id}/unpublish", post(course::unpublish))
        .route("/{id}/attachments", post(attachment::create))
        .route(
            "/{id}/attachments/{attachment_id}",
            delete(attachment::delete),
        )
        .route("/{id}/chapters", post(chapter::create))
        .route("/{id}/chapters/reorder", put(chapter::reorder))
        .route(
            "/{id}/chapters/{chapter_id}",
            get(chapter::get_by_id)
                .patch(chapter::update)
                .delete(chapter::delete),
        )
        .route("/{id}/chapters/{chapter_id}/publish", post(chapter::publish))
        .route(
            "/{id}/chapters/{chapter_id}/unpublish",
            post(chapter::unpublish),
        )
}
