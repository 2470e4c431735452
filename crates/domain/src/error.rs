//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FavoritesError`]
//! via `From`. There are no `String` variants: storage adapters box their own
//! error type into [`FavoritesError::Storage`].

use crate::id::UserId;

/// Top-level error returned by every application service and port.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// A request carried data that violates a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A membership test was asked for a user that has no favorites record.
    #[error("undefined membership")]
    UndefinedMembership(#[from] UndefinedMembershipError),

    /// The record store failed (connectivity, decoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier was empty.
    #[error("{0} must not be empty")]
    EmptyId(&'static str),
}

/// Membership cannot be decided because the user has no record to test against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("user {user_id} has no favorites record")]
pub struct UndefinedMembershipError {
    pub user_id: UserId,
}
