//! # favhub-domain
//!
//! Pure domain model for the favhub favorites service.
//!
//! ## Responsibilities
//! - Foundational types: opaque identifiers, error conventions, timestamps
//! - Define the **favorite record** (a user's ordered, duplicate-free list of
//!   favorited events) and its add/remove state transitions
//! - Define **notifications** (`fav`, `fav_cancel`) announced after a change
//! - Define **log records** handed to the centralized logging sink
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod favorite;
pub mod log_record;
pub mod notification;
