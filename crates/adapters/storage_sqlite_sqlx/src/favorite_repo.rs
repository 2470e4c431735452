//! `SQLite` implementation of [`FavoriteRepository`].
//!
//! One row per user; the ordered list lives in a JSON `TEXT` column.
//! `put_list` is an upsert so a lost create/create race degrades to
//! last-write-wins instead of a constraint violation.

use std::future::Future;

use sqlx::SqlitePool;

use favhub_app::ports::FavoriteRepository;
use favhub_domain::error::FavoritesError;
use favhub_domain::id::{EventId, UserId};

use crate::error::StorageError;

const SELECT_BY_USER: &str = "SELECT favs_list FROM favorites WHERE user_id = ?";
const UPSERT: &str = "INSERT INTO favorites (user_id, favs_list) VALUES (?, ?) \
     ON CONFLICT(user_id) DO UPDATE SET favs_list = excluded.favs_list";
const DELETE_BY_USER: &str = "DELETE FROM favorites WHERE user_id = ?";

/// `SQLite`-backed favorites repository.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Vec<EventId>>, FavoritesError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        async move {
            let row: Option<(String,)> = sqlx::query_as(SELECT_BY_USER)
                .bind(user_id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some((encoded,)) = row else {
                return Ok(None);
            };
            let event_ids: Vec<EventId> =
                serde_json::from_str(&encoded).map_err(StorageError::from)?;
            Ok(Some(event_ids))
        }
    }

    fn put_list(
        &self,
        user_id: &UserId,
        event_ids: &[EventId],
    ) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        let encoded = serde_json::to_string(event_ids);
        async move {
            let encoded = encoded.map_err(StorageError::from)?;
            sqlx::query(UPSERT)
                .bind(user_id)
                .bind(encoded)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, user_id: &UserId) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        async move {
            sqlx::query(DELETE_BY_USER)
                .bind(user_id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
