//! # favhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FavoriteRepository` — per-user favorites record store
//!   - `NotificationPublisher` — announce `fav` / `fav_cancel`
//!   - `LogSink` — centralized structured logging
//! - Implement the **favorites engine** (read-modify-write of a record)
//! - Define the **driving/inbound port** `FavoritesService`, the single entry
//!   point both transports call
//! - Provide **in-process infrastructure** (notification bus, tracing log sink)
//!   that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `favhub-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod favorites_engine;
pub mod log_sink;
pub mod ports;
pub mod services;

#[cfg(test)]
mod fakes;
