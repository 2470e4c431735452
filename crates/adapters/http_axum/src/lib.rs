//! # favhub-adapter-http-axum
//!
//! Public HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the favorites endpoints (`POST /new_fav`, `POST /cancel_fav`,
//!   `GET /get_favs/{id}`, `GET /is_faved/{user_id}/{event_id}`)
//! - Stream `fav` / `fav_cancel` notifications as Server-Sent Events
//! - Map HTTP requests into `FavoritesService` calls (driving adapter)
//! - Map application results and errors into status codes
//!
//! ## Dependency rule
//! Depends on `favhub-app` (for port traits and services) and `favhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
