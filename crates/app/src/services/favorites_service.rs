//! Favorites service — the use-cases both transports call.
//!
//! Each mutating call is logged to the [`LogSink`] first, then executed by the
//! [`FavoritesEngine`], and a [`Notification`] is published only when the
//! engine reports [`Change::Changed`]. Logging and publishing are best-effort:
//! their failures are traced and never undo or fail the mutation.

use favhub_domain::error::FavoritesError;
use favhub_domain::favorite::{Change, Favorite};
use favhub_domain::id::{EventId, UserId};
use favhub_domain::log_record::LogRecord;
use favhub_domain::notification::Notification;

use crate::favorites_engine::FavoritesEngine;
use crate::ports::{FavoriteRepository, LogSink, NotificationPublisher};

/// Name under which the service identifies itself to collaborators.
pub const SERVICE_NAME: &str = "favorites";

/// Application service orchestrating logging, the engine and notifications.
pub struct FavoritesService<R, P, L> {
    engine: FavoritesEngine<R>,
    publisher: P,
    log_sink: L,
}

impl<R, P, L> FavoritesService<R, P, L>
where
    R: FavoriteRepository,
    P: NotificationPublisher,
    L: LogSink,
{
    /// Create a new service from its collaborators.
    pub fn new(repo: R, publisher: P, log_sink: L) -> Self {
        Self {
            engine: FavoritesEngine::new(repo),
            publisher,
            log_sink,
        }
    }

    async fn audit(&self, operation: &str, favorite: &Favorite, message: &str) {
        let record = LogRecord::info(SERVICE_NAME, operation, favorite.clone(), message);
        if let Err(err) = self.log_sink.log(record).await {
            tracing::warn!(error = %err, operation, "log sink rejected record");
        }
    }

    async fn dispatch(&self, notification: Notification) {
        let kind = notification.kind;
        if let Err(err) = self.publisher.publish(notification).await {
            tracing::warn!(error = %err, %kind, "failed to publish notification");
        }
    }

    /// Add a favorite and announce it with a `fav` notification if it is new.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the record store fails.
    pub async fn new_fav(&self, favorite: Favorite) -> Result<Change, FavoritesError> {
        self.audit("new_fav", &favorite, "Saving favorite").await;

        let change = self
            .engine
            .add_favorite(&favorite.user_id, &favorite.event_id)
            .await?;
        if change.is_changed() {
            self.dispatch(Notification::favorite_added(favorite)).await;
        }
        Ok(change)
    }

    /// Remove a favorite and announce it with a `fav_cancel` notification if
    /// something was removed.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the record store fails.
    pub async fn cancel_fav(&self, favorite: Favorite) -> Result<Change, FavoritesError> {
        self.audit("cancel_fav", &favorite, "Removing favorite").await;

        let change = self
            .engine
            .remove_favorite(&favorite.user_id, &favorite.event_id)
            .await?;
        if change.is_changed() {
            self.dispatch(Notification::favorite_removed(favorite)).await;
        } else {
            tracing::warn!(
                user_id = %favorite.user_id,
                event_id = %favorite.event_id,
                "attempted to cancel a favorite that does not exist"
            );
        }
        Ok(change)
    }

    /// List a user's favorites, `None` if the user has never favorited anything.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::Storage`] if the record store fails.
    pub async fn get_favs(&self, user_id: &UserId) -> Result<Option<Vec<EventId>>, FavoritesError> {
        self.engine.list_favorites(user_id).await
    }

    /// Whether `event_id` is among the user's favorites.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::UndefinedMembership`] if the user has no
    /// record, or [`FavoritesError::Storage`] if the record store fails.
    pub async fn is_faved(&self, user_id: &UserId, event_id: &EventId) -> Result<bool, FavoritesError> {
        self.engine.is_favorited(user_id, event_id).await
    }
}
