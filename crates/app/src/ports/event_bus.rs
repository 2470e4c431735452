//! Notification port — publish/subscribe for favorite changes.

use std::future::Future;

use favhub_domain::error::FavoritesError;
use favhub_domain::notification::Notification;

/// Publishes notifications to interested subscribers.
pub trait NotificationPublisher {
    /// Publish a notification to all current subscribers.
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), FavoritesError>> + Send;
}

impl<T: NotificationPublisher + Send + Sync> NotificationPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        (**self).publish(notification)
    }
}
