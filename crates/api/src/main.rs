use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courseforge_api::config::ServerConfig;
use courseforge_api::router::build_app_router;
use courseforge_api::state::AppState;
use courseforge_api::video::{DisabledVideoPlatform, HttpVideoPlatform, VideoPlatform};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courseforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = courseforge_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    courseforge_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    courseforge_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    // Video asset bookkeeping is optional; without VIDEO_API_URL chapters
    // still store their video URL, we just skip the platform calls.
    let video: Arc<dyn VideoPlatform> = match &config.video {
        Some(video_config) => {
            tracing::info!(api_url = %video_config.api_url, "Video platform client enabled");
            Arc::new(HttpVideoPlatform::new(video_config))
        }
        None => {
            tracing::warn!("VIDEO_API_URL not set, video asset bookkeeping disabled");
            Arc::new(DisabledVideoPlatform)
        }
    };

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        video,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolves when SIGINT (Ctrl-C) or, on Unix, SIGTERM arrives so the
/// server drains in-flight requests before exiting.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
