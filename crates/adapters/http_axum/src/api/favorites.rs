//! Favorites handlers.
//!
//! Mutations answer `201 Created` with an empty body. `POST /cancel_fav`
//! answers `404 Not Found` when there was nothing to remove.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};
use favhub_domain::favorite::{Change, Favorite};
use favhub_domain::id::{EventId, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the add endpoint.
pub enum NewFavResponse {
    Created,
}

impl IntoResponse for NewFavResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// Possible responses from the cancel endpoint.
pub enum CancelFavResponse {
    Created,
    NotFound,
}

impl From<Change> for CancelFavResponse {
    fn from(change: Change) -> Self {
        match change {
            Change::Changed => Self::Created,
            Change::Unchanged => Self::NotFound,
        }
    }
}

impl IntoResponse for CancelFavResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
///
/// A user without favorites is `null`, never `[]`.
pub enum GetFavsResponse {
    Ok(Json<Option<Vec<EventId>>>),
}

impl IntoResponse for GetFavsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the membership endpoint.
pub enum IsFavedResponse {
    Ok(Json<bool>),
}

impl IntoResponse for IsFavedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /new_fav` with body `[user_id, event_id]`
pub async fn new_fav<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Json(favorite): Json<Favorite>,
) -> Result<NewFavResponse, ApiError>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    state.favorites.new_fav(favorite).await?;
    Ok(NewFavResponse::Created)
}

/// `POST /cancel_fav` with body `[user_id, event_id]`
pub async fn cancel_fav<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Json(favorite): Json<Favorite>,
) -> Result<CancelFavResponse, ApiError>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    let change = state.favorites.cancel_fav(favorite).await?;
    Ok(change.into())
}

/// `GET /get_favs/{id}`
pub async fn get_favs<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Path(id): Path<String>,
) -> Result<GetFavsResponse, ApiError>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    let user_id = UserId::from_str(&id)?;
    let favorites = state.favorites.get_favs(&user_id).await?;
    Ok(GetFavsResponse::Ok(Json(favorites)))
}

/// `GET /is_faved/{user_id}/{event_id}`
pub async fn is_faved<R, P, L>(
    State(state): State<AppState<R, P, L>>,
    Path((user_id, event_id)): Path<(String, String)>,
) -> Result<IsFavedResponse, ApiError>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    let user_id = UserId::from_str(&user_id)?;
    let event_id = EventId::from_str(&event_id)?;
    let faved = state.favorites.is_faved(&user_id, &event_id).await?;
    Ok(IsFavedResponse::Ok(Json(faved)))
}
