//! Attachment entity model and DTOs.

use courseforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An attachment row from the `attachments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attachment {
    pub id: DbId,
    pub course_id: DbId,
    /// Display name derived from the last path segment of `url`.
    pub name: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for attaching an already-uploaded file to a course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAttachment {
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
}
