//! Favorite — the per-user list of favorited events and its state transitions.
//!
//! A [`FavoriteRecord`] exists only while the user has at least one favorite;
//! removing the last one yields [`Removal::Emptied`] and the caller deletes the
//! persisted record instead of storing an empty list.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, UserId};

/// A `(user, event)` pairing, encoded on the wire as `[user_id, event_id]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(UserId, EventId)", into = "(UserId, EventId)")]
pub struct Favorite {
    pub user_id: UserId,
    pub event_id: EventId,
}

impl Favorite {
    #[must_use]
    pub fn new(user_id: UserId, event_id: EventId) -> Self {
        Self { user_id, event_id }
    }
}

impl From<(UserId, EventId)> for Favorite {
    fn from((user_id, event_id): (UserId, EventId)) -> Self {
        Self { user_id, event_id }
    }
}

impl From<Favorite> for (UserId, EventId) {
    fn from(value: Favorite) -> Self {
        (value.user_id, value.event_id)
    }
}

/// Whether a mutating operation actually altered persisted state.
///
/// Notifications are dispatched only for [`Change::Changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    Changed,
    Unchanged,
}

impl Change {
    #[must_use]
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl From<bool> for Change {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Result of removing an event from a record.
#[derive(Debug, PartialEq, Eq)]
pub enum Removal {
    /// The event was not in the list; the record is returned untouched.
    Unchanged(FavoriteRecord),
    /// The event was removed and other favorites remain.
    Shrunk(FavoriteRecord),
    /// The event was the last favorite; the record must be deleted.
    Emptied,
}

/// The persisted per-user document: an ordered, duplicate-free list of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRecord {
    user_id: UserId,
    event_ids: Vec<EventId>,
}

impl FavoriteRecord {
    /// Record created by a user's first favorite.
    #[must_use]
    pub fn first(user_id: UserId, event_id: EventId) -> Self {
        Self {
            user_id,
            event_ids: vec![event_id],
        }
    }

    /// Rebuild a record from a stored list.
    ///
    /// Returns `None` for an empty list, since no record may exist without a
    /// favorite. Later duplicates are dropped, keeping first-insertion order.
    #[must_use]
    pub fn from_stored(user_id: UserId, stored: Vec<EventId>) -> Option<Self> {
        let mut event_ids: Vec<EventId> = Vec::with_capacity(stored.len());
        for event_id in stored {
            if !event_ids.contains(&event_id) {
                event_ids.push(event_id);
            }
        }
        if event_ids.is_empty() {
            return None;
        }
        Some(Self { user_id, event_ids })
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn event_ids(&self) -> &[EventId] {
        &self.event_ids
    }

    #[must_use]
    pub fn into_event_ids(self) -> Vec<EventId> {
        self.event_ids
    }

    #[must_use]
    pub fn contains(&self, event_id: &EventId) -> bool {
        self.event_ids.contains(event_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.event_ids.len()
    }

    /// Always `false`: a record never holds an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_ids.is_empty()
    }

    /// Append `event_id` unless it is already present.
    pub fn add(&mut self, event_id: EventId) -> Change {
        if self.contains(&event_id) {
            return Change::Unchanged;
        }
        self.event_ids.push(event_id);
        Change::Changed
    }

    /// Remove `event_id`, consuming the record.
    #[must_use]
    pub fn remove(mut self, event_id: &EventId) -> Removal {
        let Some(position) = self.event_ids.iter().position(|id| id == event_id) else {
            return Removal::Unchanged(self);
        };
        if self.event_ids.len() == 1 {
            return Removal::Emptied;
        }
        self.event_ids.remove(position);
        Removal::Shrunk(self)
    }
}
