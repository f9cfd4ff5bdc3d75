//! Repository for the `categories` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Read-only access to the seeded category list.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories, alphabetical.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a category by id (used to validate course updates).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
