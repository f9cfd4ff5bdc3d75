//! Category entity model.

use courseforge_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A category row from the `categories` table. The list is seeded by
/// migration; there is no create/update surface.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
