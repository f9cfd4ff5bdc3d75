//! Video asset metadata model.

use courseforge_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `video_assets` table: playback metadata for a chapter's
/// externally hosted video. Upload and transcoding happen on the video
/// platform; we only keep the identifiers needed for playback and cleanup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoAsset {
    pub id: DbId,
    pub chapter_id: DbId,
    /// The platform's asset identifier, used for remote deletion.
    pub asset_id: String,
    /// The platform's playback identifier, `None` until transcoding is done.
    pub playback_id: Option<String>,
}
