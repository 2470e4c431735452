//! In-memory port implementations shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use favhub_domain::error::FavoritesError;
use favhub_domain::id::{EventId, UserId};
use favhub_domain::log_record::LogRecord;
use favhub_domain::notification::Notification;

use crate::ports::{FavoriteRepository, LogSink, NotificationPublisher};

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn event(id: &str) -> EventId {
    EventId::new(id).unwrap()
}

fn unreachable_store() -> FavoritesError {
    FavoritesError::Storage(Box::new(std::io::Error::other("store unreachable")))
}

#[derive(Default)]
pub struct InMemoryFavoriteRepo {
    store: Mutex<HashMap<UserId, Vec<EventId>>>,
    writes: AtomicUsize,
}

impl InMemoryFavoriteRepo {
    pub fn stored(&self, user_id: &str) -> Option<Vec<String>> {
        let store = self.store.lock().unwrap();
        store
            .get(&user(user_id))
            .map(|ids| ids.iter().map(ToString::to_string).collect())
    }

    pub fn seed(&self, user_id: &str, event_ids: &[&str]) {
        let ids = event_ids.iter().map(|id| event(id)).collect();
        self.store.lock().unwrap().insert(user(user_id), ids);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl FavoriteRepository for InMemoryFavoriteRepo {
    async fn get(&self, user_id: &UserId) -> Result<Option<Vec<EventId>>, FavoritesError> {
        Ok(self.store.lock().unwrap().get(user_id).cloned())
    }

    async fn put_list(&self, user_id: &UserId, event_ids: &[EventId]) -> Result<(), FavoritesError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap()
            .insert(user_id.clone(), event_ids.to_vec());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), FavoritesError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().remove(user_id);
        Ok(())
    }
}

/// A store whose every call fails, as if the database were unreachable.
pub struct FailingRepo;

impl FavoriteRepository for FailingRepo {
    async fn get(&self, _user_id: &UserId) -> Result<Option<Vec<EventId>>, FavoritesError> {
        Err(unreachable_store())
    }

    async fn put_list(&self, _user_id: &UserId, _event_ids: &[EventId]) -> Result<(), FavoritesError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _user_id: &UserId) -> Result<(), FavoritesError> {
        Err(unreachable_store())
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    pub published: Mutex<Vec<Notification>>,
}

impl RecordingPublisher {
    pub fn names(&self) -> Vec<&'static str> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.kind.name())
            .collect()
    }
}

impl NotificationPublisher for RecordingPublisher {
    async fn publish(&self, notification: Notification) -> Result<(), FavoritesError> {
        self.published.lock().unwrap().push(notification);
        Ok(())
    }
}

pub struct FailingPublisher;

impl NotificationPublisher for FailingPublisher {
    async fn publish(&self, _notification: Notification) -> Result<(), FavoritesError> {
        Err(unreachable_store())
    }
}

#[derive(Default)]
pub struct RecordingLogSink {
    pub records: Mutex<Vec<LogRecord>>,
}

impl LogSink for RecordingLogSink {
    async fn log(&self, record: LogRecord) -> Result<(), FavoritesError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

pub struct FailingLogSink;

impl LogSink for FailingLogSink {
    async fn log(&self, _record: LogRecord) -> Result<(), FavoritesError> {
        Err(unreachable_store())
    }
}
