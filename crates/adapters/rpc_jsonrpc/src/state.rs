//! Shared state for the JSON-RPC endpoint.

use std::sync::Arc;

use favhub_app::services::favorites_service::FavoritesService;

/// State handed to the `/rpc` handler.
pub struct RpcState<R, P, L> {
    pub favorites: Arc<FavoritesService<R, P, L>>,
}

impl<R, P, L> Clone for RpcState<R, P, L> {
    fn clone(&self) -> Self {
        Self {
            favorites: Arc::clone(&self.favorites),
        }
    }
}

impl<R, P, L> RpcState<R, P, L> {
    pub fn new(favorites: Arc<FavoritesService<R, P, L>>) -> Self {
        Self { favorites }
    }
}
