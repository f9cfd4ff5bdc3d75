//! Handlers for the instructor `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use courseforge_core::error::CoreError;
use courseforge_core::publish::{course_missing_requirements, missing_requirements_message};
use courseforge_core::types::DbId;
use courseforge_db::models::attachment::Attachment;
use courseforge_db::models::chapter::Chapter;
use courseforge_db::models::course::{Course, CreateCourse, UpdateCourse};
use courseforge_db::repositories::{
    AttachmentRepo, CategoryRepo, ChapterRepo, CourseRepo, VideoAssetRepo,
};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// An instructor's course with its chapters (in display order) and
/// attachments.
#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub chapters: Vec<Chapter>,
    pub attachments: Vec<Attachment>,
}

/// Load a course and verify the caller owns it.
///
/// 404 for an unknown id, 403 when the course belongs to someone else.
/// Every instructor-surface handler goes through this gate.
pub(crate) async fn owned_course(
    state: &AppState,
    user: &AuthUser,
    course_id: DbId,
) -> AppResult<Course> {
    let course = CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    if course.owner_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this course".into(),
        )));
    }
    Ok(course)
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    input.validate()?;
    let course = CourseRepo::create(&state.pool, &user.user_id, &input).await?;
    tracing::info!(course_id = course.id, owner_id = %course.owner_id, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
pub async fn list_own(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_by_owner(&state.pool, &user.user_id).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseDetail>> {
    let course = owned_course(&state, &user, id).await?;
    let chapters = ChapterRepo::list_by_course(&state.pool, id).await?;
    let attachments = AttachmentRepo::list_by_course(&state.pool, id).await?;
    Ok(Json(CourseDetail {
        course,
        chapters,
        attachments,
    }))
}

/// PATCH /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    input.validate()?;
    owned_course(&state, &user, id).await?;

    if let Some(category_id) = input.category_id {
        if CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown category id {category_id}"
            ))));
        }
    }

    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
///
/// Remote video assets of all chapters are deleted before the row, so the
/// external platform never accumulates orphans; local children follow via
/// FK cascade.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    owned_course(&state, &user, id).await?;

    if state.video.enabled() {
        for asset in VideoAssetRepo::list_by_course(&state.pool, id).await? {
            state.video.delete_asset(&asset.asset_id).await?;
        }
    }

    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(course_id = id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}

/// POST /api/v1/courses/{id}/publish
///
/// 400 with the full list of missing requirements when the course is not
/// eligible.
pub async fn publish(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = owned_course(&state, &user, id).await?;
    let published_chapters = ChapterRepo::published_count(&state.pool, id).await?;

    let missing = course_missing_requirements(
        &course.title,
        course.description.as_deref(),
        course.image_url.as_deref(),
        course.category_id.is_some(),
        published_chapters as usize,
    );
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            missing_requirements_message(&missing),
        )));
    }

    let course = CourseRepo::set_published(&state.pool, id, true)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    tracing::info!(course_id = id, "Course published");
    Ok(Json(course))
}

/// POST /api/v1/courses/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    owned_course(&state, &user, id).await?;
    let course = CourseRepo::set_published(&state.pool, id, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}
