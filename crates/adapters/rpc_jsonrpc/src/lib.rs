//! # favhub-adapter-rpc
//!
//! Internal remote-procedure adapter: the `favorites` service over
//! [JSON-RPC 2.0](https://www.jsonrpc.org/specification), carried by a single
//! `POST /rpc` endpoint built on axum.
//!
//! ## Operations
//! | Method | Params | Result |
//! |---|---|---|
//! | `favorites.new_fav` | `[[user_id, event_id]]` or `[user_id, event_id]` | `"changed"` / `"unchanged"` |
//! | `favorites.cancel_fav` | same | `"changed"` / `"unchanged"` |
//! | `favorites.get_favs_by_id` | `[user_id]` or `user_id` | array or `null` |
//! | `favorites.is_event_faved` | `[user_id, event_id]` | `true` / `false` |
//!
//! The `favorites.` prefix is optional.
//!
//! ## Dependency rule
//! Depends on `favhub-app` and `favhub-domain` only; shares the same
//! `FavoritesService` instance as the HTTP adapter.

pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
