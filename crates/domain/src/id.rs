//! Opaque identifier newtypes.
//!
//! Identifiers are never interpreted: they only need to be non-empty. Callers
//! historically send them either as JSON strings or as JSON integers, so
//! deserialization accepts both and normalizes integers to their decimal form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Wire shape accepted for an identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(value) => value.to_string(),
            RawId::Unsigned(value) => value.to_string(),
        }
    }
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $label:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyId`] when `value` is empty.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(ValidationError::EmptyId($label));
                }
                Ok(Self(value))
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = RawId::deserialize(deserializer)?;
                Self::new(String::from(raw)).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Identifier of the user owning a favorites record.
    UserId,
    "user_id"
);

define_id!(
    /// Identifier of a favorited event.
    EventId,
    "event_id"
);

/// Unique identifier of a published [`Notification`](crate::notification::Notification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(uuid::Uuid);

impl Default for NotificationId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl NotificationId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_notification_ids() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn should_reject_empty_user_id() {
        assert_eq!(UserId::new(""), Err(ValidationError::EmptyId("user_id")));
    }

    #[test]
    fn should_reject_empty_event_id_when_parsing() {
        let result = EventId::from_str("");
        assert_eq!(result, Err(ValidationError::EmptyId("event_id")));
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = UserId::new("alice").unwrap();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = EventId::new("e-42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""e-42""#);
    }

    #[test]
    fn should_accept_integer_ids_from_json() {
        let user: UserId = serde_json::from_str("17").unwrap();
        let event: EventId = serde_json::from_str("-3").unwrap();
        assert_eq!(user.as_str(), "17");
        assert_eq!(event.as_str(), "-3");
    }

    #[test]
    fn should_fail_deserializing_empty_string() {
        let result: Result<UserId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn should_fail_deserializing_non_scalar() {
        let result: Result<EventId, _> = serde_json::from_str("[1]");
        assert!(result.is_err());
    }
}
