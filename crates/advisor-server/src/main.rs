//! robo-advisor HTTP Server
//!
//! Hosts the portfolio-recommendation code hook behind a webhook endpoint so
//! the bot platform (or a local test harness) can POST events to it.

mod config;
mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{fulfill, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        max_age = config.rules.max_age,
        min_investment = config.rules.min_investment,
        "Validation rules loaded"
    );

    let registry = robo_advisor::registry_with_rules(config.rules.clone());
    tracing::info!("Registered {} intents:", registry.len());
    for name in registry.names() {
        tracing::info!("  • {}", name);
    }

    let app = router(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("robo-advisor listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  POST /fulfill - Code hook events");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Routes shared by the binary and its tests
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/fulfill", post(fulfill))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
