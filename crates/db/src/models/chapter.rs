//! Chapter entity model and DTOs.

use courseforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A chapter row from the `chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    /// Per-course ordering, appended as `max + 1` starting at 1.
    pub position: i32,
    pub is_published: bool,
    pub is_free: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter. The position is assigned server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChapter {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
}

/// DTO for partially updating a chapter. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateChapter {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "video_url must be a valid URL"))]
    pub video_url: Option<String>,
    pub is_free: Option<bool>,
}

/// One entry of a drag-and-drop reorder request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReorderEntry {
    pub id: DbId,
    pub position: i32,
}
