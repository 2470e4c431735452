//! Method routing and parameter decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};
use favhub_app::services::favorites_service::FavoritesService;
use favhub_domain::favorite::Favorite;
use favhub_domain::id::{EventId, UserId};

use crate::error::RpcError;

/// Namespace prefix under which the operations are published.
pub const NAMESPACE: &str = "favorites.";

/// Route a method call to the favorites service and encode its result.
///
/// # Errors
///
/// Returns [`RpcError`] with `-32601` for an unknown method, `-32602` for
/// malformed params, or the mapping of the service's [`FavoritesError`].
///
/// [`FavoritesError`]: favhub_domain::error::FavoritesError
pub async fn route_method<R, P, L>(
    service: &FavoritesService<R, P, L>,
    method: &str,
    params: Option<&Value>,
) -> Result<Value, RpcError>
where
    R: FavoriteRepository,
    P: NotificationPublisher,
    L: LogSink,
{
    let operation = method.strip_prefix(NAMESPACE).unwrap_or(method);

    match operation {
        "new_fav" => {
            let favorite = parse_favorite(params)?;
            encode(service.new_fav(favorite).await?)
        }
        "cancel_fav" => {
            let favorite = parse_favorite(params)?;
            encode(service.cancel_fav(favorite).await?)
        }
        "get_favs_by_id" => {
            let user_id: UserId = parse_param(params, 0)?;
            encode(service.get_favs(&user_id).await?)
        }
        "is_event_faved" => {
            let user_id: UserId = parse_param(params, 0)?;
            let event_id: EventId = parse_param(params, 1)?;
            encode(service.is_faved(&user_id, &event_id).await?)
        }
        _ => Err(RpcError::method_not_found(method)),
    }
}

fn encode<T: serde::Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|err| {
        tracing::error!(error = %err, "failed to encode rpc result");
        RpcError::new(crate::error::codes::INTERNAL_ERROR, "Internal error")
    })
}

/// Decode a positional parameter. A non-array `params` counts as index 0.
fn parse_param<T: DeserializeOwned>(params: Option<&Value>, index: usize) -> Result<T, RpcError> {
    let param = params
        .and_then(|p| match p {
            Value::Array(items) => items.get(index),
            other if index == 0 => Some(other),
            _ => None,
        })
        .ok_or_else(|| RpcError::invalid_params(format!("missing parameter at index {index}")))?;

    serde_json::from_value(param.clone())
        .map_err(|err| RpcError::invalid_params(format!("parameter at index {index}: {err}")))
}

/// Decode the favorite pair, given either wrapped (`[[u, e]]`) or flat (`[u, e]`).
fn parse_favorite(params: Option<&Value>) -> Result<Favorite, RpcError> {
    match params {
        Some(Value::Array(items)) if matches!(items.first(), Some(Value::Array(_))) => {
            parse_param(params, 0)
        }
        Some(flat @ Value::Array(_)) => serde_json::from_value(flat.clone())
            .map_err(|err| RpcError::invalid_params(format!("favorite: {err}"))),
        _ => Err(RpcError::invalid_params(
            "expected [user_id, event_id] or [[user_id, event_id]]",
        )),
    }
}
