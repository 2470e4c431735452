//! Port fakes and router builders for handler tests.

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
use crate::state::AppState;

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

pub fn test_app() -> (Router, Arc<InProcessNotificationBus>) {
    let bus = Arc::new(InProcessNotificationBus::new(16));
    let service = FavoritesService::new(
        InMemoryFavoriteRepo::default(),
        Arc::clone(&bus),
        TracingLogSink,
    );
    (router::build(AppState::new(service, Arc::clone(&bus))), bus)
}

pub fn failing_app() -> Router {
    let bus = Arc::new(InProcessNotificationBus::new(16));
    let service = FavoritesService::new(UnreachableRepo, Arc::clone(&bus), TracingLogSink);
    router::build(AppState::new(service, bus))
}
