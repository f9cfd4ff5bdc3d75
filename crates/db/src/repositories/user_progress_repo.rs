//! Repository for the `user_progress` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_progress::UserProgress;

const COLUMNS: &str = "id, user_id, chapter_id, is_completed, created_at, updated_at";

/// Per-user completion bookkeeping.
pub struct UserProgressRepo;

impl UserProgressRepo {
    /// Set the completion flag for a (user, chapter) pair, creating the
    /// row on first touch.
    pub async fn upsert(
        pool: &PgPool,
        user_id: &str,
        chapter_id: DbId,
        is_completed: bool,
    ) -> Result<UserProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_progress (user_id, chapter_id, is_completed)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, chapter_id)
             DO UPDATE SET is_completed = EXCLUDED.is_completed, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .bind(chapter_id)
            .bind(is_completed)
            .fetch_one(pool)
            .await
    }

    /// The progress row for a (user, chapter) pair, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        chapter_id: DbId,
    ) -> Result<Option<UserProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_progress WHERE user_id = $1 AND chapter_id = $2"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .bind(chapter_id)
            .fetch_optional(pool)
            .await
    }

    /// How many of the given chapters the user has completed.
    ///
    /// Callers pass the course's *published* chapter ids so draft chapters
    /// never count toward progress.
    pub async fn count_completed_in(
        pool: &PgPool,
        user_id: &str,
        chapter_ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        if chapter_ids.is_empty() {
            return Ok(0);
        }
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_progress
             WHERE user_id = $1 AND is_completed AND chapter_id = ANY($2)",
        )
        .bind(user_id)
        .bind(chapter_ids)
        .fetch_one(pool)
        .await
    }

    /// Ids of the chapters the user has completed within a course.
    pub async fn completed_chapter_ids(
        pool: &PgPool,
        user_id: &str,
        course_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT up.chapter_id FROM user_progress up
             JOIN chapters ch ON ch.id = up.chapter_id
             WHERE up.user_id = $1 AND up.is_completed AND ch.course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_all(pool)
        .await
    }
}
