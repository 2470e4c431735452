//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};

use crate::state::AppState;

/// Build the top-level axum [`Router`] for the public HTTP surface.
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, P, L>(state: AppState<R, P, L>) -> Router
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
