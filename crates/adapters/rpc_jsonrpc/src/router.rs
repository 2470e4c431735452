//! The `POST /rpc` endpoint.
//!
//! Single calls and batches are both accepted. Calls without an `id` are
//! notifications: they run but produce no response entry, and a request made
//! only of notifications is answered with `204 No Content`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};

use crate::dispatch::route_method;
use crate::error::RpcError;
use crate::protocol::{Request, Response, VERSION};
use crate::state::RpcState;

/// Build the router serving the JSON-RPC endpoint.
pub fn build<R, P, L>(state: RpcState<R, P, L>) -> Router
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    Router::new()
        .route("/rpc", post(handle::<R, P, L>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// What the endpoint answers for one HTTP request.
pub enum RpcReply {
    Single(Response),
    Batch(Vec<Response>),
    NoContent,
}

impl IntoResponse for RpcReply {
    fn into_response(self) -> HttpResponse {
        match self {
            Self::Single(response) => Json(response).into_response(),
            Self::Batch(responses) => Json(responses).into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

async fn handle<R, P, L>(State(state): State<RpcState<R, P, L>>, body: Bytes) -> RpcReply
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return RpcReply::Single(Response::failure(None, RpcError::parse_error(err))),
    };

    match payload {
        Value::Array(calls) if calls.is_empty() => RpcReply::Single(Response::failure(
            None,
            RpcError::invalid_request("empty batch"),
        )),
        Value::Array(calls) => {
            let mut responses = Vec::with_capacity(calls.len());
            for call in calls {
                if let Some(response) = handle_call(&state, call).await {
                    responses.push(response);
                }
            }
            if responses.is_empty() {
                RpcReply::NoContent
            } else {
                RpcReply::Batch(responses)
            }
        }
        call => match handle_call(&state, call).await {
            Some(response) => RpcReply::Single(response),
            None => RpcReply::NoContent,
        },
    }
}

async fn handle_call<R, P, L>(state: &RpcState<R, P, L>, call: Value) -> Option<Response>
where
    R: FavoriteRepository,
    P: NotificationPublisher,
    L: LogSink,
{
    let request: Request = match serde_json::from_value(call) {
        Ok(request) => request,
        Err(err) => return Some(Response::failure(None, RpcError::invalid_request(err))),
    };

    if request.jsonrpc != VERSION {
        return Some(Response::failure(
            request.id,
            RpcError::invalid_request(format!("unsupported jsonrpc version {:?}", request.jsonrpc)),
        ));
    }

    tracing::debug!(method = %request.method, "rpc call");
    let outcome = route_method(&state.favorites, &request.method, request.params.as_ref()).await;

    let id = request.id?;
    Some(match outcome {
        Ok(result) => Response::success(Some(id), result),
        Err(error) => Response::failure(Some(id), error),
    })
}
