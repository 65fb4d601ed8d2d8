//! Entry point: parse configuration and serve the gateway.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use swishradar::{
    gateway::{self, proxy::PROXY_ROUTES, GatewayState},
    logging::setup_logging,
    GatewayConfig,
};
use tracing::{info, warn};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// Run the gateway.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::parse();
    setup_logging()?;

    if config.credentials().is_none() {
        warn!("ESPN_SWID / ESPN_S2 not set; /api/league routes will answer 401");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(GatewayState::new(config)?);

    info!(config = ?state.config, "SwishRadar API starting on {addr}");
    info!(
        seasons = ?state.seasons.candidates(),
        "ESPN API: {}, ESPN service: {} ({} proxy routes)",
        state.espn.base_url(),
        state.service_url(),
        PROXY_ROUTES.len()
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, gateway::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
