// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the crop condition engine
// Usage: cargo run --features api --bin api_server

use crop_condition_rust::{create_router, AppState, EngineConfig};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "crop_condition_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let config = match std::env::var("ENGINE_CONFIG") {
        Ok(path) => {
            tracing::info!("  ENGINE_CONFIG: {}", path);
            EngineConfig::load(Path::new(&path))?
        }
        Err(_) => EngineConfig::default(),
    };

    tracing::info!("  PORT: {}", port);

    let state = AppState::new(config);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
