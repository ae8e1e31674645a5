mod config;
mod error;
mod handlers;
mod models;
mod router;
mod storage;
mod upstream;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{AppError, Result};

use storage::UploadStore;
use upstream::UpstreamClient;

pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: Config) -> std::result::Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::from_config(&config)?;
        let uploads = UploadStore::from_config(&config);

        Ok(Self {
            config,
            upstream,
            uploads,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let config = Config::from_env()?;
    tracing::info!(
        "Relaying to {}, storing uploads in {}",
        config.upstream_base_url,
        config.uploads_dir
    );

    let state = Arc::new(AppState::new(config.clone())?);
    let app = router::app_router(state);

    let addr = config.bind_addr();
    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
