//! Per-user, per-chapter completion records.

use courseforge_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_progress` table. One row per (user, chapter),
/// upserted whenever the player toggles completion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProgress {
    pub id: DbId,
    pub user_id: UserId,
    pub chapter_id: DbId,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for setting a chapter's completion flag.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpsertProgress {
    pub is_completed: bool,
}
