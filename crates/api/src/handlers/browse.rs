//! Handlers for the student browse surface.

use axum::extract::{Path, Query, State};
use axum::Json;
use courseforge_core::error::CoreError;
use courseforge_core::progress::{completion_pct, is_complete};
use courseforge_core::types::DbId;
use courseforge_db::models::chapter::Chapter;
use courseforge_db::models::course::{Course, CourseWithCategory};
use courseforge_db::repositories::{ChapterRepo, CourseRepo, PurchaseRepo, UserProgressRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the course search (`?title=&category_id=`).
#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    pub title: Option<String>,
    pub category_id: Option<DbId>,
}

/// A published course as listed on the browse and dashboard pages.
#[derive(Debug, Serialize)]
pub struct BrowseCourse {
    #[serde(flatten)]
    pub course: CourseWithCategory,
    /// Ids of the course's published chapters, in display order.
    pub published_chapter_ids: Vec<DbId>,
    /// Completion percentage; `None` when the caller has not purchased
    /// the course.
    pub progress: Option<f64>,
}

/// GET /api/v1/browse/courses
pub async fn search(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<BrowseParams>,
) -> AppResult<Json<Vec<BrowseCourse>>> {
    let courses = CourseRepo::search_published(
        &state.pool,
        params.title.as_deref(),
        params.category_id,
    )
    .await?;

    let mut results = Vec::with_capacity(courses.len());
    for course in courses {
        let purchased = PurchaseRepo::find(&state.pool, &user.user_id, course.id)
            .await?
            .is_some();
        results.push(browse_course(&state.pool, &user.user_id, course, purchased).await?);
    }
    Ok(Json(results))
}

/// The caller's purchased courses, split by completion.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub completed_courses: Vec<BrowseCourse>,
    pub courses_in_progress: Vec<BrowseCourse>,
}

/// GET /api/v1/browse/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Dashboard>> {
    let purchased = CourseRepo::list_purchased_by_user(&state.pool, &user.user_id).await?;

    let mut completed_courses = Vec::new();
    let mut courses_in_progress = Vec::new();
    for course in purchased {
        let entry = browse_course(&state.pool, &user.user_id, course, true).await?;
        if entry.progress.is_some_and(is_complete) {
            completed_courses.push(entry);
        } else {
            courses_in_progress.push(entry);
        }
    }
    Ok(Json(Dashboard {
        completed_courses,
        courses_in_progress,
    }))
}

/// A published chapter with the caller's completion flag.
#[derive(Debug, Serialize)]
pub struct ChapterWithCompletion {
    #[serde(flatten)]
    pub chapter: Chapter,
    pub is_completed: bool,
}

/// A published course as seen on its student-facing page.
#[derive(Debug, Serialize)]
pub struct CourseView {
    pub course: Course,
    pub chapters: Vec<ChapterWithCompletion>,
    pub progress: Option<f64>,
    pub purchased: bool,
}

/// GET /api/v1/browse/courses/{course_id}
pub async fn course_view(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<CourseView>> {
    let course = CourseRepo::find_published_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    let chapters = ChapterRepo::list_published_by_course(&state.pool, course_id).await?;
    let completed =
        UserProgressRepo::completed_chapter_ids(&state.pool, &user.user_id, course_id).await?;
    let purchased = PurchaseRepo::find(&state.pool, &user.user_id, course_id)
        .await?
        .is_some();

    let progress = purchased.then(|| {
        let done = chapters
            .iter()
            .filter(|ch| completed.contains(&ch.id))
            .count();
        completion_pct(chapters.len(), done)
    });

    let chapters = chapters
        .into_iter()
        .map(|chapter| ChapterWithCompletion {
            is_completed: completed.contains(&chapter.id),
            chapter,
        })
        .collect();

    Ok(Json(CourseView {
        course,
        chapters,
        progress,
        purchased,
    }))
}

/// Assemble a [`BrowseCourse`] from a course row and purchase status.
async fn browse_course(
    pool: &PgPool,
    user_id: &str,
    course: CourseWithCategory,
    purchased: bool,
) -> AppResult<BrowseCourse> {
    let published_chapter_ids = ChapterRepo::published_ids(pool, course.id).await?;

    let progress = if purchased {
        let done =
            UserProgressRepo::count_completed_in(pool, user_id, &published_chapter_ids).await?;
        Some(completion_pct(published_chapter_ids.len(), done as usize))
    } else {
        None
    };

    Ok(BrowseCourse {
        course,
        published_chapter_ids,
        progress,
    })
}
