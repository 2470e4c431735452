//! Storage port — the per-user favorites record store.
//!
//! The store is a document collection keyed by user id, each document holding
//! the ordered list of favorited event ids. No transaction spans a `get` and
//! the following `put_list`/`delete`: concurrent writers for the same user race
//! and the store's upsert decides the final state.

use std::future::Future;

use favhub_domain::error::FavoritesError;
use favhub_domain::id::{EventId, UserId};

/// Repository for the favorites collection.
pub trait FavoriteRepository {
    /// Fetch the stored list for `user_id`.
    ///
    /// `None` means no record exists, which is distinct from a stored empty
    /// list.
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Vec<EventId>>, FavoritesError>> + Send;

    /// Insert or replace the whole list for `user_id`.
    fn put_list(
        &self,
        user_id: &UserId,
        event_ids: &[EventId],
    ) -> impl Future<Output = Result<(), FavoritesError>> + Send;

    /// Delete the record for `user_id`. Deleting a missing record is not an error.
    fn delete(&self, user_id: &UserId) -> impl Future<Output = Result<(), FavoritesError>> + Send;
}

impl<T: FavoriteRepository + Send + Sync> FavoriteRepository for std::sync::Arc<T> {
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Vec<EventId>>, FavoritesError>> + Send {
        (**self).get(user_id)
    }

    fn put_list(
        &self,
        user_id: &UserId,
        event_ids: &[EventId],
    ) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        (**self).put_list(user_id, event_ids)
    }

    fn delete(&self, user_id: &UserId) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        (**self).delete(user_id)
    }
}
