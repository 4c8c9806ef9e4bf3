// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the sample evaluator
// Usage: cargo run --features api --bin api_server

use hmpi_scorer_rust::{create_router, AppState, EngineConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "hmpi_scorer_rust=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = EngineConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  HMPI_REFERENCE_TABLE: {:?}", config.reference_table);
    tracing::info!("  HMPI_CLASSIFICATION: {:?}", config.scheme);
    tracing::info!("  PORT: {}", config.port);

    let evaluator = config.build_evaluator()?;
    tracing::info!("Evaluator ready ({} metals)", evaluator.table().len());

    let app = create_router(AppState::new(evaluator));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
