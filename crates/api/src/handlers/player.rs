//! Handlers for the student chapter player: the gated chapter view,
//! progress toggling, and purchase recording.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use courseforge_core::error::CoreError;
use courseforge_core::types::DbId;
use courseforge_db::models::attachment::Attachment;
use courseforge_db::models::chapter::Chapter;
use courseforge_db::models::purchase::Purchase;
use courseforge_db::models::user_progress::{UpsertProgress, UserProgress};
use courseforge_db::models::video_asset::VideoAsset;
use courseforge_db::repositories::{
    AttachmentRepo, ChapterRepo, CourseRepo, PurchaseRepo, UserProgressRepo, VideoAssetRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Everything the chapter player needs in one response.
///
/// Paid content is withheld rather than omitted client-side: attachments
/// require a purchase, playback info and the next chapter require the
/// chapter to be free or the course purchased.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub chapter: Chapter,
    pub course_price_cents: Option<i64>,
    pub attachments: Vec<Attachment>,
    pub video_asset: Option<VideoAsset>,
    pub next_chapter: Option<Chapter>,
    pub user_progress: Option<UserProgress>,
    pub purchased: bool,
}

fn course_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Course",
        id,
    })
}

fn chapter_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Chapter",
        id,
    })
}

/// GET /api/v1/browse/courses/{course_id}/chapters/{chapter_id}
///
/// 404 unless both the course and the chapter are published.
pub async fn chapter_view(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, chapter_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<PlayerView>> {
    let course = CourseRepo::find_published_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;
    let chapter = ChapterRepo::find_published_by_id(&state.pool, course_id, chapter_id)
        .await?
        .ok_or_else(|| chapter_not_found(chapter_id))?;

    let purchased = PurchaseRepo::find(&state.pool, &user.user_id, course_id)
        .await?
        .is_some();
    let unlocked = chapter.is_free || purchased;

    let attachments = if purchased {
        AttachmentRepo::list_by_course(&state.pool, course_id).await?
    } else {
        Vec::new()
    };

    let (video_asset, next_chapter) = if unlocked {
        (
            VideoAssetRepo::find_by_chapter(&state.pool, chapter_id).await?,
            ChapterRepo::next_published_after(&state.pool, course_id, chapter.position).await?,
        )
    } else {
        (None, None)
    };

    let user_progress = UserProgressRepo::find(&state.pool, &user.user_id, chapter_id).await?;

    Ok(Json(PlayerView {
        chapter,
        course_price_cents: course.price_cents,
        attachments,
        video_asset,
        next_chapter,
        user_progress,
        purchased,
    }))
}

/// PUT /api/v1/browse/courses/{course_id}/chapters/{chapter_id}/progress
pub async fn update_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path((course_id, chapter_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpsertProgress>,
) -> AppResult<Json<UserProgress>> {
    // Progress only exists for chapters a student can actually see.
    CourseRepo::find_published_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;
    ChapterRepo::find_published_by_id(&state.pool, course_id, chapter_id)
        .await?
        .ok_or_else(|| chapter_not_found(chapter_id))?;

    let progress =
        UserProgressRepo::upsert(&state.pool, &user.user_id, chapter_id, input.is_completed)
            .await?;
    tracing::info!(
        user_id = %user.user_id,
        chapter_id,
        is_completed = input.is_completed,
        "Progress updated"
    );
    Ok(Json(progress))
}

/// POST /api/v1/browse/courses/{course_id}/purchase
///
/// Records a purchase after the external payment processor has settled;
/// 409 when the caller already owns the course.
pub async fn purchase(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    CourseRepo::find_published_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    if PurchaseRepo::find(&state.pool, &user.user_id, course_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Course already purchased".into(),
        )));
    }

    let purchase = PurchaseRepo::create(&state.pool, &user.user_id, course_id).await?;
    tracing::info!(user_id = %user.user_id, course_id, "Course purchased");
    Ok((StatusCode::CREATED, Json(purchase)))
}
