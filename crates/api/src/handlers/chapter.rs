//! Handlers for chapters nested under an instructor's course.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use courseforge_core::error::CoreError;
use courseforge_core::ordering::{next_position, validate_reorder};
use courseforge_core::publish::{chapter_missing_requirements, missing_requirements_message};
use courseforge_core::types::DbId;
use courseforge_db::models::chapter::{Chapter, CreateChapter, ReorderEntry, UpdateChapter};
use courseforge_db::models::video_asset::VideoAsset;
use courseforge_db::repositories::{ChapterRepo, CourseRepo, VideoAssetRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::course::owned_course;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A chapter with its video asset metadata, as shown in the editor.
#[derive(Debug, Serialize)]
pub struct ChapterDetail {
    pub chapter: Chapter,
    pub video_asset: Option<VideoAsset>,
}

fn chapter_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Chapter",
        id,
    })
}

/// POST /api/v1/courses/{course_id}/chapters
///
/// The new chapter is appended: position `max + 1`, starting at 1.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<CreateChapter>,
) -> AppResult<(StatusCode, Json<Chapter>)> {
    input.validate()?;
    owned_course(&state, &user, course_id).await?;

    let position = next_position(ChapterRepo::max_position(&state.pool, course_id).await?);
    let chapter = ChapterRepo::create(&state.pool, course_id, &input.title, position).await?;
    tracing::info!(course_id, chapter_id = chapter.id, position, "Chapter created");
    Ok((StatusCode::CREATED, Json(chapter)))
}

/// PUT /api/v1/courses/{course_id}/chapters/reorder
///
/// Body: `[{id, position}, ...]` as computed by the drag-and-drop editor.
/// All entries must reference chapters of this course; the rewrite runs in
/// a single transaction.
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    owned_course(&state, &user, course_id).await?;

    let known_ids = ChapterRepo::ids_for_course(&state.pool, course_id).await?;
    let requested: Vec<(DbId, i32)> = entries.iter().map(|e| (e.id, e.position)).collect();
    validate_reorder(&known_ids, &requested)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    ChapterRepo::reorder(&state.pool, course_id, &entries).await?;
    tracing::info!(course_id, moved = entries.len(), "Chapters reordered");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/courses/{course_id}/chapters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<ChapterDetail>> {
    owned_course(&state, &user, course_id).await?;

    let chapter = ChapterRepo::find_by_id(&state.pool, course_id, id)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;
    let video_asset = VideoAssetRepo::find_by_chapter(&state.pool, id).await?;
    Ok(Json(ChapterDetail {
        chapter,
        video_asset,
    }))
}

/// PATCH /api/v1/courses/{course_id}/chapters/{id}
///
/// Changing `video_url` replaces the external asset: the old one is
/// deleted remotely and a new ingestion is started from the new URL.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    input.validate()?;
    owned_course(&state, &user, course_id).await?;

    let chapter = ChapterRepo::update(&state.pool, course_id, id, &input)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;

    if let Some(video_url) = &input.video_url {
        if state.video.enabled() {
            if let Some(old) = VideoAssetRepo::find_by_chapter(&state.pool, id).await? {
                state.video.delete_asset(&old.asset_id).await?;
                VideoAssetRepo::delete_by_chapter(&state.pool, id).await?;
            }
            let asset = state.video.create_asset(video_url).await?;
            VideoAssetRepo::create(
                &state.pool,
                id,
                &asset.asset_id,
                asset.playback_id.as_deref(),
            )
            .await?;
        }
    }

    Ok(Json(chapter))
}

/// DELETE /api/v1/courses/{course_id}/chapters/{id}
///
/// Cleans up the external video asset, then the row. If this was the last
/// published chapter of a published course, the course is unpublished.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    owned_course(&state, &user, course_id).await?;

    let chapter = ChapterRepo::find_by_id(&state.pool, course_id, id)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;

    if state.video.enabled() {
        if let Some(asset) = VideoAssetRepo::find_by_chapter(&state.pool, id).await? {
            state.video.delete_asset(&asset.asset_id).await?;
            VideoAssetRepo::delete_by_chapter(&state.pool, id).await?;
        }
    }

    ChapterRepo::delete(&state.pool, course_id, id).await?;
    tracing::info!(course_id, chapter_id = id, "Chapter deleted");

    if chapter.is_published {
        unpublish_course_if_empty(&state, course_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/courses/{course_id}/chapters/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Chapter>> {
    owned_course(&state, &user, course_id).await?;

    let chapter = ChapterRepo::find_by_id(&state.pool, course_id, id)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;

    let missing = chapter_missing_requirements(
        &chapter.title,
        chapter.description.as_deref(),
        chapter.video_url.as_deref(),
    );
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            missing_requirements_message(&missing),
        )));
    }

    let chapter = ChapterRepo::set_published(&state.pool, course_id, id, true)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;
    tracing::info!(course_id, chapter_id = id, "Chapter published");
    Ok(Json(chapter))
}

/// POST /api/v1/courses/{course_id}/chapters/{id}/unpublish
///
/// Unpublishing the last published chapter unpublishes the course, so the
/// student surface never lists a course with nothing to watch.
pub async fn unpublish(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Chapter>> {
    owned_course(&state, &user, course_id).await?;

    let chapter = ChapterRepo::set_published(&state.pool, course_id, id, false)
        .await?
        .ok_or_else(|| chapter_not_found(id))?;

    unpublish_course_if_empty(&state, course_id).await?;
    Ok(Json(chapter))
}

/// Unpublish the course when it no longer has any published chapter.
async fn unpublish_course_if_empty(state: &AppState, course_id: DbId) -> AppResult<()> {
    let remaining = ChapterRepo::published_count(&state.pool, course_id).await?;
    if remaining == 0 {
        CourseRepo::set_published(&state.pool, course_id, false).await?;
        tracing::info!(course_id, "Course unpublished: no published chapters remain");
    }
    Ok(())
}
