use std::sync::Arc;

use crate::config::ServerConfig;
use crate::video::VideoPlatform;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: courseforge_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// External video platform client (disabled when unconfigured).
    pub video: Arc<dyn VideoPlatform>,
}
