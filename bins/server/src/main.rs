//! Stridebank API Server
//!
//! Main entry point for the Stridebank backend service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stridebank_api::{AppState, create_router};
use stridebank_shared::AppConfig;
use stridebank_store::{MemoryStore, seed_demo_accounts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stridebank=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the in-memory store
    let store = Arc::new(MemoryStore::new());
    if config.seed.demo_data {
        seed_demo_accounts(&store)?;
    }

    // Create application state
    let state = AppState::new(store, Duration::from_millis(config.sync.delay_ms));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
