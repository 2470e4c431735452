//! # favhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `FavoriteRepository` port defined in `favhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between the favorites list and its stored JSON column
//!
//! ## Dependency rule
//! Depends on `favhub-app` (for port traits) and `favhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod favorite_repo;
pub mod pool;

pub use error::StorageError;
pub use favorite_repo::SqliteFavoriteRepository;
pub use pool::{Config, Database};
