//! Shared application state for axum handlers.

use std::sync::Arc;

use favhub_app::event_bus::InProcessNotificationBus;
use favhub_app::services::favorites_service::FavoritesService;

/// Application state shared across all axum handlers.
///
/// Generic over the record store, notification publisher and log sink to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, P, L> {
    /// Favorites use-cases.
    pub favorites: Arc<FavoritesService<R, P, L>>,
    /// Bus the notification stream subscribes to.
    pub notifications: Arc<InProcessNotificationBus>,
}

impl<R, P, L> Clone for AppState<R, P, L> {
    fn clone(&self) -> Self {
        Self {
            favorites: Arc::clone(&self.favorites),
            notifications: Arc::clone(&self.notifications),
        }
    }
}

impl<R, P, L> AppState<R, P, L> {
    /// Create the state from a service and the bus it publishes to.
    pub fn new(favorites: FavoritesService<R, P, L>, notifications: Arc<InProcessNotificationBus>) -> Self {
        Self {
            favorites: Arc::new(favorites),
            notifications,
        }
    }

    /// Create the state from an already shared service.
    ///
    /// Use this when the same service also backs the remote-procedure adapter.
    pub fn from_arcs(
        favorites: Arc<FavoritesService<R, P, L>>,
        notifications: Arc<InProcessNotificationBus>,
    ) -> Self {
        Self {
            favorites,
            notifications,
        }
    }
}
