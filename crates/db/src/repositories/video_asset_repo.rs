//! Repository for the `video_assets` table.

use courseforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::video_asset::VideoAsset;

const COLUMNS: &str = "id, chapter_id, asset_id, playback_id";

/// Playback-metadata bookkeeping for externally hosted chapter videos.
pub struct VideoAssetRepo;

impl VideoAssetRepo {
    /// Insert the asset row for a chapter. One per chapter; the caller
    /// deletes any existing row first when replacing a video.
    pub async fn create(
        pool: &PgPool,
        chapter_id: DbId,
        asset_id: &str,
        playback_id: Option<&str>,
    ) -> Result<VideoAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_assets (chapter_id, asset_id, playback_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(chapter_id)
            .bind(asset_id)
            .bind(playback_id)
            .fetch_one(pool)
            .await
    }

    /// The asset row for a chapter, if one exists.
    pub async fn find_by_chapter(
        pool: &PgPool,
        chapter_id: DbId,
    ) -> Result<Option<VideoAsset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_assets WHERE chapter_id = $1");
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(chapter_id)
            .fetch_optional(pool)
            .await
    }

    /// All asset rows for a course's chapters. Used to clean up remote
    /// assets before a course delete cascades.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<VideoAsset>, sqlx::Error> {
        let query = format!(
            "SELECT va.id, va.chapter_id, va.asset_id, va.playback_id
             FROM video_assets va
             JOIN chapters ch ON ch.id = va.chapter_id
             WHERE ch.course_id = $1"
        );
        sqlx::query_as::<_, VideoAsset>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the asset row for a chapter. Returns `true` if a row was
    /// removed.
    pub async fn delete_by_chapter(pool: &PgPool, chapter_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM video_assets WHERE chapter_id = $1")
            .bind(chapter_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
