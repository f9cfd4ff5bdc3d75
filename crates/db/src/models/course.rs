//! Course entity model and DTOs.

use courseforge_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Price in the smallest currency unit; `None` means not priced yet.
    pub price_cents: Option<i64>,
    pub category_id: Option<DbId>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A published course joined with its category name, as shown on the
/// student browse surface.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseWithCategory {
    pub id: DbId,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_cents: Option<i64>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course. Everything beyond the title is filled in
/// later through [`UpdateCourse`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
}

/// DTO for partially updating a course. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(range(min = 0, message = "price_cents must not be negative"))]
    pub price_cents: Option<i64>,
    pub category_id: Option<DbId>,
}
