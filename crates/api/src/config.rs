use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the JWT secret has a default suitable for local
/// development; production overrides via the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation configuration (shared secret with the identity
    /// provider).
    pub jwt: JwtConfig,
    /// External video platform settings. `None` disables asset bookkeeping.
    pub video: Option<VideoPlatformConfig>,
}

/// Credentials for the external video platform's REST API.
#[derive(Debug, Clone)]
pub struct VideoPlatformConfig {
    /// Base URL, e.g. `https://video.example.com`.
    pub api_url: String,
    /// Bearer token for the platform API.
    pub api_token: String,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `VIDEO_API_URL`        | unset (bookkeeping off)    |
    /// | `VIDEO_API_TOKEN`      | unset                      |
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Both the URL and the token are needed; a half-configured
        // platform counts as disabled.
        let video = match (
            std::env::var("VIDEO_API_URL"),
            std::env::var("VIDEO_API_TOKEN"),
        ) {
            (Ok(api_url), Ok(api_token)) => Some(VideoPlatformConfig { api_url, api_token }),
            _ => None,
        };

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
            jwt: JwtConfig::from_env(),
            video,
        }
    }
}
