//! HTTP surface of the Rotection catalog.
//!
//! # Routes
//! - `GET /games?q=` search by name, developer or category
//! - `GET /games/featured` first 3 games in load order
//! - `GET /games/{id}` one game, ids only hold until the next reload
//! - `POST /reload` fetch the spreadsheet again, 502 keeps the old catalog
//! - `GET /submit`, `GET /games/{id}/rate` redirect to the community server
//!
//! # Configuration
//! - `RUST_PORT` (1111)
//! - `CATALOG_URL` (published spreadsheet CSV)
//! - `COMMUNITY_URL` (https://discord.com)
//! - `CATALOG_REFRESH_SECS` (0, disabled)
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod payloads;
pub mod refresh;
pub mod routes;
pub mod state;

use config::Config;
use refresh::refresh_loop;
use routes::{
    featured_handler, game_handler, rate_handler, reload_handler, search_handler, submit_handler,
};
use state::State;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config).await;

    if !state.config.refresh_interval.is_zero() {
        tokio::spawn(refresh_loop(state.clone()));
    }

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/games", get(search_handler))
        .route("/games/featured", get(featured_handler))
        .route("/games/{id}", get(game_handler))
        .route("/games/{id}/rate", get(rate_handler))
        .route("/reload", post(reload_handler))
        .route("/submit", get(submit_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
