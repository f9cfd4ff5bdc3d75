//! Repository for the `attachments` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::attachment::Attachment;

const COLUMNS: &str = "id, course_id, name, url, created_at";

/// Provides CRUD operations for course attachments.
pub struct AttachmentRepo;

impl AttachmentRepo {
    /// Insert a new attachment. The display name is derived by the caller
    /// from the URL's last path segment.
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        name: &str,
        url: &str,
    ) -> Result<Attachment, sqlx::Error> {
        let query = format!(
            "INSERT INTO attachments (course_id, name, url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(course_id)
            .bind(name)
            .bind(url)
            .fetch_one(pool)
            .await
    }

    /// All attachments of a course, newest first.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attachments WHERE course_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an attachment, scoped to its course. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, course_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attachments WHERE id = $1 AND course_id = $2")
            .bind(id)
            .bind(course_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
