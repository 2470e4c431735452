//! # favhubd — favorites daemon
//!
//! Composition root that wires the favorites service to its adapters and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`favhub.toml`, env vars)
//! - Initialize `tracing` with the configured filter
//! - Open the `SQLite` pool and run migrations
//! - Build one `FavoritesService` shared by the HTTP and JSON-RPC transports
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use favhub_adapter_http_axum::state::AppState;
use favhub_adapter_rpc::state::RpcState;
use favhub_adapter_storage_sqlite_sqlx::{self as storage, SqliteFavoriteRepository};
use favhub_app::event_bus::InProcessNotificationBus;
use favhub_app::log_sink::TracingLogSink;
use favhub_app::services::favorites_service::FavoritesService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = storage::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let repo = SqliteFavoriteRepository::new(db.pool().clone());

    // Notification bus
    let bus = Arc::new(InProcessNotificationBus::new(config.bus.capacity));

    // Service, shared by both transports
    let favorites = Arc::new(FavoritesService::new(repo, Arc::clone(&bus), TracingLogSink));

    let http = favhub_adapter_http_axum::router::build(AppState::from_arcs(
        Arc::clone(&favorites),
        bus,
    ));
    let rpc = favhub_adapter_rpc::router::build(RpcState::new(favorites));
    let app = http.merge(rpc);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "favhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("favhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
