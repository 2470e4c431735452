//! HTTP handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod favorites;
pub mod notifications;

use axum::Router;
use axum::routing::{get, post};

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};

use crate::state::AppState;

/// Build the favorites and notification routes.
///
/// Paths are served at the root to stay compatible with existing callers.
pub fn routes<R, P, L>() -> Router<AppState<R, P, L>>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    Router::new()
        .route("/new_fav", post(favorites::new_fav::<R, P, L>))
        .route("/cancel_fav", post(favorites::cancel_fav::<R, P, L>))
        .route("/get_favs/{id}", get(favorites::get_favs::<R, P, L>))
        .route(
            "/is_faved/{user_id}/{event_id}",
            get(favorites::is_faved::<R, P, L>),
        )
        .route(
            "/notifications/stream",
            get(notifications::stream::<R, P, L>),
        )
}
