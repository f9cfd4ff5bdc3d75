//! Repository for the `chapters` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::chapter::{Chapter, ReorderEntry, UpdateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, title, description, video_url, position, is_published, \
     is_free, created_at, updated_at";

/// Provides CRUD, ordering, and lookup operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new draft chapter at the given position.
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        title: &str,
        position: i32,
    ) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (course_id, title, position)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(course_id)
            .bind(title)
            .bind(position)
            .fetch_one(pool)
            .await
    }

    /// Highest position currently used in the course, `None` when empty.
    pub async fn max_position(pool: &PgPool, course_id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(position) FROM chapters WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Find a chapter by id, scoped to its course.
    pub async fn find_by_id(
        pool: &PgPool,
        course_id: DbId,
        id: DbId,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = $1 AND course_id = $2");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published chapter by id, scoped to its course.
    pub async fn find_published_by_id(
        pool: &PgPool,
        course_id: DbId,
        id: DbId,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters
             WHERE id = $1 AND course_id = $2 AND is_published"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// All chapters of a course in display order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters WHERE course_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Published chapters of a course in display order.
    pub async fn list_published_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters
             WHERE course_id = $1 AND is_published
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Ids of all chapters in a course (for reorder validation).
    pub async fn ids_for_course(pool: &PgPool, course_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM chapters WHERE course_id = $1")
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Ids of published chapters in a course (for progress computation).
    pub async fn published_ids(pool: &PgPool, course_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM chapters WHERE course_id = $1 AND is_published")
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Number of published chapters in a course.
    pub async fn published_count(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM chapters WHERE course_id = $1 AND is_published")
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// The next published chapter after `position`, if any.
    pub async fn next_published_after(
        pool: &PgPool,
        course_id: DbId,
        position: i32,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters
             WHERE course_id = $1 AND is_published AND position > $2
             ORDER BY position ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(course_id)
            .bind(position)
            .fetch_optional(pool)
            .await
    }

    /// Update a chapter. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the chapter does not exist in this course.
    pub async fn update(
        pool: &PgPool,
        course_id: DbId,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE chapters SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                video_url = COALESCE($5, video_url),
                is_free = COALESCE($6, is_free),
                updated_at = NOW()
             WHERE id = $1 AND course_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_url)
            .bind(input.is_free)
            .fetch_optional(pool)
            .await
    }

    /// Flip the publish flag. Eligibility is checked by the caller.
    pub async fn set_published(
        pool: &PgPool,
        course_id: DbId,
        id: DbId,
        is_published: bool,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE chapters SET is_published = $3, updated_at = NOW()
             WHERE id = $1 AND course_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(course_id)
            .bind(is_published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a chapter. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, course_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = $1 AND course_id = $2")
            .bind(id)
            .bind(course_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a drag-and-drop reorder in a single transaction, so a failure
    /// partway through cannot leave a half-applied ordering.
    ///
    /// Entries are assumed validated (ids belong to the course, no
    /// duplicates); each update is still scoped to `course_id`.
    pub async fn reorder(
        pool: &PgPool,
        course_id: DbId,
        entries: &[ReorderEntry],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in entries {
            sqlx::query(
                "UPDATE chapters SET position = $3, updated_at = NOW()
                 WHERE id = $1 AND course_id = $2",
            )
            .bind(entry.id)
            .bind(course_id)
            .bind(entry.position)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await
    }
}
