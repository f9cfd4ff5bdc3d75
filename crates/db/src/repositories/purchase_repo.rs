//! Repository for the `purchases` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::purchase::Purchase;

const COLUMNS: &str = "id, user_id, course_id, created_at";

/// Purchase records granting course access.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Record a purchase. The `uq_purchases_user_course` constraint makes
    /// double purchases surface as a 23505 the API maps to 409.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        course_id: DbId,
    ) -> Result<Purchase, sqlx::Error> {
        let query = format!(
            "INSERT INTO purchases (user_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// The purchase row for a (user, course) pair, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        course_id: DbId,
    ) -> Result<Option<Purchase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM purchases WHERE user_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }
}
