//! Favorites engine — read-modify-write of a user's favorites record.
//!
//! Every operation starts with a fresh read from the [`FavoriteRepository`];
//! nothing is cached between calls. Mutations return a [`Change`] so the caller
//! can decide whether a notification is due.
//!
//! The read and the write are not atomic: two concurrent requests for the same
//! user may both read the same list and the last write wins.

use favhub_domain::error::{FavoritesError, UndefinedMembershipError};
use favhub_domain::favorite::{Change, FavoriteRecord, Removal};
use favhub_domain::id::{EventId, UserId};

use crate::ports::FavoriteRepository;

/// Stateless favorites logic over a record store.
pub struct FavoritesEngine<R> {
    repo: R,
}

impl<R: FavoriteRepository> FavoritesEngine<R> {
    /// Create an engine backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    async fn load(&self, user_id: &UserId) -> Result<Option<FavoriteRecord>, FavoritesError> {
        let Some(stored) = self.repo.get(user_id).await? else {
            return Ok(None);
        };
        let record = FavoriteRecord::from_stored(user_id.clone(), stored);
        if record.is_none() {
            tracing::warn!(%user_id, "stored favorites list is empty, treating as absent");
        }
        Ok(record)
    }

    /// Add `event_id` to the user's favorites.
    ///
    /// Creates the record on the first favorite. Adding an event that is
    /// already present performs no write and reports [`Change::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the read or the write fails.
    pub async fn add_favorite(
        &self,
        user_id: &UserId,
        event_id: &EventId,
    ) -> Result<Change, FavoritesError> {
        let Some(mut record) = self.load(user_id).await? else {
            let record = FavoriteRecord::first(user_id.clone(), event_id.clone());
            self.repo.put_list(user_id, record.event_ids()).await?;
            tracing::debug!(%user_id, %event_id, "created favorites record");
            return Ok(Change::Changed);
        };

        let change = record.add(event_id.clone());
        if change.is_changed() {
            self.repo.put_list(user_id, record.event_ids()).await?;
            tracing::debug!(%user_id, %event_id, count = record.len(), "appended favorite");
        }
        Ok(change)
    }

    /// Remove `event_id` from the user's favorites.
    ///
    /// Removing the last favorite deletes the record. A missing record or a
    /// missing event is reported as [`Change::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the store fails. A store failure
    /// is never reported as "nothing to remove".
    pub async fn remove_favorite(
        &self,
        user_id: &UserId,
        event_id: &EventId,
    ) -> Result<Change, FavoritesError> {
        let Some(record) = self.load(user_id).await? else {
            return Ok(Change::Unchanged);
        };

        match record.remove(event_id) {
            Removal::Unchanged(_) => Ok(Change::Unchanged),
            Removal::Shrunk(record) => {
                self.repo.put_list(user_id, record.event_ids()).await?;
                tracing::debug!(%user_id, %event_id, count = record.len(), "removed favorite");
                Ok(Change::Changed)
            }
            Removal::Emptied => {
                self.repo.delete(user_id).await?;
                tracing::debug!(%user_id, %event_id, "removed last favorite, record deleted");
                Ok(Change::Changed)
            }
        }
    }

    /// List the user's favorites in insertion order.
    ///
    /// Returns `None` when the user has no record; never an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the read fails.
    pub async fn list_favorites(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Vec<EventId>>, FavoritesError> {
        Ok(self.load(user_id).await?.map(FavoriteRecord::into_event_ids))
    }

    /// Test whether `event_id` is among the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::UndefinedMembership`] when the user has no
    /// record, or [`FavoritesError::Storage`] if the read fails.
    pub async fn is_favorited(
        &self,
        user_id: &UserId,
        event_id: &EventId,
    ) -> Result<bool, FavoritesError> {
        let favorites = self.list_favorites(user_id).await?.ok_or_else(|| {
            UndefinedMembershipError {
                user_id: user_id.clone(),
            }
        })?;
        Ok(favorites.contains(event_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FailingRepo, InMemoryFavoriteRepo, event, user};
    use std::sync::Arc;

    fn make_engine() -> (FavoritesEngine<Arc<InMemoryFavoriteRepo>>, Arc<InMemoryFavoriteRepo>) {
        let repo = Arc::new(InMemoryFavoriteRepo::default());
        (FavoritesEngine::new(Arc::clone(&repo)), repo)
    }

    fn names(ids: &[EventId]) -> Vec<&str> {
        ids.iter().map(EventId::as_str).collect()
    }

    #[tokio::test]
    async fn should_create_record_on_first_favorite() {
        let (engine, repo) = make_engine();

        let change = engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        assert_eq!(change, Change::Changed);
        assert_eq!(repo.stored("u1"), Some(vec!["e1".to_string()]));
    }

    #[tokio::test]
    async fn should_report_unchanged_when_adding_twice() {
        let (engine, repo) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();
        let writes = repo.write_count();

        let change = engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        assert_eq!(change, Change::Unchanged);
        assert_eq!(repo.write_count(), writes, "no write on duplicate add");
        let favorites = engine.list_favorites(&user("u1")).await.unwrap().unwrap();
        assert_eq!(names(&favorites), vec!["e1"]);
    }

    #[tokio::test]
    async fn should_list_single_favorite_after_first_add() {
        let (engine, _) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        let favorites = engine.list_favorites(&user("u1")).await.unwrap().unwrap();
        assert_eq!(names(&favorites), vec!["e1"]);
    }

    #[tokio::test]
    async fn should_walk_through_add_remove_scenario() {
        let (engine, _) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();
        engine.add_favorite(&user("u1"), &event("e2")).await.unwrap();

        let change = engine.remove_favorite(&user("u1"), &event("e1")).await.unwrap();
        assert_eq!(change, Change::Changed);
        let favorites = engine.list_favorites(&user("u1")).await.unwrap().unwrap();
        assert_eq!(names(&favorites), vec!["e2"]);

        let change = engine.remove_favorite(&user("u1"), &event("e2")).await.unwrap();
        assert_eq!(change, Change::Changed);
        assert!(engine.list_favorites(&user("u1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_record_when_removing_last_favorite() {
        let (engine, repo) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        engine.remove_favorite(&user("u1"), &event("e1")).await.unwrap();

        assert_eq!(repo.stored("u1"), None, "record must be gone, not empty");
    }

    #[tokio::test]
    async fn should_report_unchanged_when_removing_from_absent_record() {
        let (engine, repo) = make_engine();

        let change = engine.remove_favorite(&user("u1"), &event("e1")).await.unwrap();

        assert_eq!(change, Change::Unchanged);
        assert_eq!(repo.write_count(), 0);
    }

    #[tokio::test]
    async fn should_report_unchanged_when_removing_unknown_event() {
        let (engine, _) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        let change = engine.remove_favorite(&user("u1"), &event("e2")).await.unwrap();

        assert_eq!(change, Change::Unchanged);
        let favorites = engine.list_favorites(&user("u1")).await.unwrap().unwrap();
        assert_eq!(names(&favorites), vec!["e1"]);
    }

    #[tokio::test]
    async fn should_return_absent_marker_for_unknown_user() {
        let (engine, _) = make_engine();
        let favorites = engine.list_favorites(&user("unknown_user")).await.unwrap();
        assert!(favorites.is_none());
    }

    #[tokio::test]
    async fn should_treat_stored_empty_list_as_absent() {
        let (engine, repo) = make_engine();
        repo.seed("u1", &[]);

        assert!(engine.list_favorites(&user("u1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_answer_membership_for_known_user() {
        let (engine, _) = make_engine();
        engine.add_favorite(&user("u1"), &event("e1")).await.unwrap();

        assert!(engine.is_favorited(&user("u1"), &event("e1")).await.unwrap());
        assert!(!engine.is_favorited(&user("u1"), &event("e2")).await.unwrap());
    }

    #[tokio::test]
    async fn should_fail_membership_when_user_has_no_record() {
        let (engine, _) = make_engine();

        let result = engine.is_favorited(&user("u1"), &event("e1")).await;

        assert!(matches!(
            result,
            Err(FavoritesError::UndefinedMembership(UndefinedMembershipError { user_id }))
                if user_id.as_str() == "u1"
        ));
    }

    #[tokio::test]
    async fn should_surface_store_failure_on_remove() {
        let engine = FavoritesEngine::new(FailingRepo);

        let result = engine.remove_favorite(&user("u1"), &event("e1")).await;

        assert!(matches!(result, Err(FavoritesError::Storage(_))));
    }

    #[tokio::test]
    async fn should_surface_store_failure_on_add_and_list() {
        let engine = FavoritesEngine::new(FailingRepo);

        assert!(matches!(
            engine.add_favorite(&user("u1"), &event("e1")).await,
            Err(FavoritesError::Storage(_))
        ));
        assert!(matches!(
            engine.list_favorites(&user("u1")).await,
            Err(FavoritesError::Storage(_))
        ));
    }
}
