//! Handlers for attachments nested under an instructor's course.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use courseforge_core::error::CoreError;
use courseforge_core::naming::attachment_name_from_url;
use courseforge_core::types::DbId;
use courseforge_db::models::attachment::{Attachment, CreateAttachment};
use courseforge_db::repositories::AttachmentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::course::owned_course;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/courses/{course_id}/attachments
///
/// The file is already uploaded to object storage; we store the URL with a
/// display name taken from its last path segment.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<CreateAttachment>,
) -> AppResult<(StatusCode, Json<Attachment>)> {
    input.validate()?;
    owned_course(&state, &user, course_id).await?;

    let name = attachment_name_from_url(&input.url);
    let attachment = AttachmentRepo::create(&state.pool, course_id, name, &input.url).await?;
    Ok((StatusCode::CREATED, Json(attachment)))
}

/// DELETE /api/v1/courses/{course_id}/attachments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_course(&state, &user, course_id).await?;

    let deleted = AttachmentRepo::delete(&state.pool, course_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Attachment",
            id,
        }))
    }
}
