//! Repository for the `courses` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CourseWithCategory, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, description, image_url, price_cents, category_id, \
     is_published, created_at, updated_at";

/// `courses c` columns joined with the category name, for browse queries.
const JOINED_COLUMNS: &str =
    "c.id, c.owner_id, c.title, c.description, c.image_url, c.price_cents, c.category_id, \
     cat.name AS category_name, c.is_published, c.created_at, c.updated_at";

/// Provides CRUD and browse operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new draft course owned by `owner_id`.
    pub async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (owner_id, title)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Find a course by id, published or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published course by id. The student surface never sees drafts.
    pub async fn find_published_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 AND is_published");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an instructor's courses, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                price_cents = COALESCE($5, price_cents),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.price_cents)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the publish flag. Eligibility is checked by the caller.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        is_published: bool,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET is_published = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(is_published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a course. Chapters, attachments, progress, and
    /// purchases follow via FK cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search published courses for the browse page, newest first.
    ///
    /// `title` is a case-insensitive substring match; `category_id` narrows
    /// to one category. Either filter may be absent.
    pub async fn search_published(
        pool: &PgPool,
        title: Option<&str>,
        category_id: Option<DbId>,
    ) -> Result<Vec<CourseWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM courses c
             LEFT JOIN categories cat ON cat.id = c.category_id
             WHERE c.is_published
               AND ($1::TEXT IS NULL OR c.title ILIKE '%' || $1 || '%')
               AND ($2::BIGINT IS NULL OR c.category_id = $2)
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CourseWithCategory>(&query)
            .bind(title)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List the courses a user has purchased, newest purchase first.
    pub async fn list_purchased_by_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<CourseWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM courses c
             LEFT JOIN categories cat ON cat.id = c.category_id
             JOIN purchases p ON p.course_id = c.id
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, CourseWithCategory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
