//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to notifications.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
