//! Client for the external video platform's REST API.
//!
//! Upload and transcoding happen entirely on the platform; this service
//! only asks it to ingest a raw video URL (returning asset and playback
//! ids we persist in `video_assets`) and to delete assets when chapters
//! or courses go away. The trait seam lets integration tests swap in a
//! recording stub, and deployments without credentials run with
//! [`DisabledVideoPlatform`], which skips asset bookkeeping entirely.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::VideoPlatformConfig;

/// Asset identifiers returned when the platform ingests a video URL.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    /// The platform's asset identifier, used later for deletion.
    pub asset_id: String,
    /// Playback identifier; may lag ingestion while transcoding runs.
    pub playback_id: Option<String>,
}

/// Errors from the video platform REST layer.
#[derive(Debug, thiserror::Error)]
pub enum VideoPlatformError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The platform returned a non-2xx status code.
    #[error("Video platform API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Operations the handlers need from the video platform.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Whether asset bookkeeping should run at all.
    fn enabled(&self) -> bool;

    /// Ask the platform to ingest a video from `source_url`.
    async fn create_asset(&self, source_url: &str) -> Result<NewAsset, VideoPlatformError>;

    /// Delete a previously created asset.
    async fn delete_asset(&self, asset_id: &str) -> Result<(), VideoPlatformError>;
}

/// [`reqwest`]-backed client for the real platform.
pub struct HttpVideoPlatform {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl HttpVideoPlatform {
    pub fn new(config: &VideoPlatformConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, VideoPlatformError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(VideoPlatformError::Api { status, body })
    }
}

#[async_trait]
impl VideoPlatform for HttpVideoPlatform {
    fn enabled(&self) -> bool {
        true
    }

    async fn create_asset(&self, source_url: &str) -> Result<NewAsset, VideoPlatformError> {
        let body = serde_json::json!({ "input": source_url });
        let response = self
            .client
            .post(format!("{}/assets", self.api_url))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        let asset = Self::check_status(response).await?.json::<NewAsset>().await?;
        tracing::info!(asset_id = %asset.asset_id, "Created video asset");
        Ok(asset)
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<(), VideoPlatformError> {
        let response = self
            .client
            .delete(format!("{}/assets/{asset_id}", self.api_url))
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Self::check_status(response).await?;
        tracing::info!(%asset_id, "Deleted video asset");
        Ok(())
    }
}

/// Used when no platform credentials are configured (and in tests):
/// handlers skip asset bookkeeping when `enabled()` is false.
pub struct DisabledVideoPlatform;

#[async_trait]
impl VideoPlatform for DisabledVideoPlatform {
    fn enabled(&self) -> bool {
        false
    }

    async fn create_asset(&self, _source_url: &str) -> Result<NewAsset, VideoPlatformError> {
        Err(VideoPlatformError::Api {
            status: 503,
            body: "video platform is not configured".to_string(),
        })
    }

    async fn delete_asset(&self, _asset_id: &str) -> Result<(), VideoPlatformError> {
        Err(VideoPlatformError::Api {
            status: 503,
            body: "video platform is not configured".to_string(),
        })
    }
}
