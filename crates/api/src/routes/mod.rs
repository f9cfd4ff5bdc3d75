pub mod browse;
pub mod category;
pub mod course;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                          list
///
/// /courses                                             list own, create
/// /courses/{id}                                        get, update, delete
/// /courses/{id}/publish                                publish (POST)
/// /courses/{id}/unpublish                              unpublish (POST)
/// /courses/{id}/attachments                            create
/// /courses/{id}/attachments/{attachment_id}            delete
/// /courses/{id}/chapters                               create
/// /courses/{id}/chapters/reorder                       reorder (PUT)
/// /courses/{id}/chapters/{chapter_id}                  get, update, delete
/// /courses/{id}/chapters/{chapter_id}/publish          publish (POST)
/// /courses/{id}/chapters/{chapter_id}/unpublish        unpublish (POST)
///
/// /browse/courses                                      search published
/// /browse/courses/{course_id}                          course page
/// /browse/courses/{course_id}/chapters/{chapter_id}    player view
/// /browse/courses/{course_id}/chapters/{chapter_id}/progress  upsert (PUT)
/// /browse/courses/{course_id}/purchase                 purchase (POST)
/// /browse/dashboard                                    purchased courses
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(category::router())
        .nest("/courses", course::router())
        .nest("/browse", browse::router())
}
