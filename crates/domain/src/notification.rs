//! Notification — an announcement that a user's favorites actually changed.
//!
//! Subscribers receive the event name (`fav` or `fav_cancel`) together with the
//! `[user_id, event_id]` pair that caused it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::favorite::Favorite;
use crate::id::NotificationId;
use crate::time::{Timestamp, now};

/// The two announced state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A favorite was added.
    #[serde(rename = "fav")]
    FavoriteAdded,
    /// A favorite was removed.
    #[serde(rename = "fav_cancel")]
    FavoriteRemoved,
}

impl NotificationKind {
    /// Event name as seen by subscribers.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FavoriteAdded => "fav",
            Self::FavoriteRemoved => "fav_cancel",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A published notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub payload: Favorite,
    pub timestamp: Timestamp,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, payload: Favorite) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            payload,
            timestamp: now(),
        }
    }

    #[must_use]
    pub fn favorite_added(payload: Favorite) -> Self {
        Self::new(NotificationKind::FavoriteAdded, payload)
    }

    #[must_use]
    pub fn favorite_removed(payload: Favorite) -> Self {
        Self::new(NotificationKind::FavoriteRemoved, payload)
    }
}
