//! Server-Sent Events (SSE) stream of favorite notifications.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use favhub_app::ports::{FavoriteRepository, LogSink, NotificationPublisher};

use crate::state::AppState;

/// `GET /notifications/stream` — SSE stream of `fav` / `fav_cancel` notifications.
///
/// Each frame carries the notification kind as the SSE `event:` name and the
/// JSON-encoded notification as `data:`. The stream continues until the client
/// disconnects.
pub async fn stream<R, P, L>(
    State(state): State<AppState<R, P, L>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: FavoriteRepository + Send + Sync + 'static,
    P: NotificationPublisher + Send + Sync + 'static,
    L: LogSink + Send + Sync + 'static,
{
    let rx = state.notifications.subscribe();
    let frames = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(notification) => match Event::default()
            .event(notification.kind.name())
            .id(notification.id.to_string())
            .json_data(&notification)
        {
            Ok(frame) => Some(Ok(frame)),
            Err(err) => {
                tracing::warn!(%err, "failed to encode notification for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "SSE subscriber lagged, some notifications were dropped");
            None
        }
    });

    Sse::new(frames).keep_alive(KeepAlive::default())
}
