//! Port fakes and builders for the RPC tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;

use favhub_app::event_bus::InProcessNotificationBus;
use favhub_app::log_sink::TracingLogSink;
use favhub_app::ports::FavoriteRepository;
use favhub_app::services::favorites_service::FavoritesService;
use favhub_domain::error::FavoritesError;
use favhub_domain::id::{EventId, UserId};

use crate::router;
use crate::state::RpcState;

pub type TestService<R> = FavoritesService<R, Arc<InProcessNotificationBus>, TracingLogSink>;

#[derive(Default)]
pub struct InMemoryFavoriteRepo {
    store: Mutex<HashMap<UserId, Vec<EventId>>>,
}

impl FavoriteRepository for InMemoryFavoriteRepo {
    async fn get(&self, user_id: &UserId) -> Result<Option<Vec<EventId>>, FavoritesError> {
        Ok(self.store.lock().unwrap().get(user_id).cloned())
    }

    async fn put_list(&self, user_id: &UserId, event_ids: &[EventId]) -> Result<(), FavoritesError> {
        self.store
            .lock()
            .unwrap()
            .insert(user_id.clone(), event_ids.to_vec());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), FavoritesError> {
        self.store.lock().unwrap().remove(user_id);
        Ok(())
    }
}

pub struct UnreachableRepo;

fn unreachable() -> FavoritesError {
    FavoritesError::Storage(Box::new(std::io::Error::other("store unreachable")))
}

impl FavoriteRepository for UnreachableRepo {
    async fn get(&self, _user_id: &UserId) -> Result<Option<Vec<EventId>>, FavoritesError> {
        Err(unreachable())
    }

    async fn put_list(&self, _user_id: &UserId, _event_ids: &[EventId]) -> Result<(), FavoritesError> {
        Err(unreachable())
    }

    async fn delete(&self, _user_id: &UserId) -> Result<(), FavoritesError> {
        Err(unreachable())
    }
}

fn service_with<R: FavoriteRepository>(repo: R) -> TestService<R> {
    let bus = Arc::new(InProcessNotificationBus::new(16));
    FavoritesService::new(repo, bus, TracingLogSink)
}

pub fn test_service() -> TestService<InMemoryFavoriteRepo> {
    service_with(InMemoryFavoriteRepo::default())
}

pub fn failing_service() -> TestService<UnreachableRepo> {
    service_with(UnreachableRepo)
}

pub fn test_app() -> Router {
    router::build(RpcState::new(Arc::new(test_service())))
}

pub fn failing_app() -> Router {
    router::build(RpcState::new(Arc::new(failing_service())))
}
