//! Log sink that forwards records to the `tracing` pipeline.
//!
//! Records are emitted under the `favhub::audit` target so they can be routed
//! or filtered separately from diagnostic logs.

use std::future::Future;

use favhub_domain::error::FavoritesError;
use favhub_domain::log_record::{LogLevel, LogRecord};

use crate::ports::LogSink;

/// [`LogSink`] emitting one structured `tracing` event per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, record: LogRecord) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        let LogRecord {
            service,
            operation,
            payload,
            level,
            message,
        } = record;
        let user_id = payload.user_id.as_str();
        let event_id = payload.event_id.as_str();
        match level {
            LogLevel::Debug => tracing::debug!(
                target: "favhub::audit", %service, %operation, user_id, event_id, "{message}"
            ),
            LogLevel::Info => tracing::info!(
                target: "favhub::audit", %service, %operation, user_id, event_id, "{message}"
            ),
            LogLevel::Warning => tracing::warn!(
                target: "favhub::audit", %service, %operation, user_id, event_id, "{message}"
            ),
            LogLevel::Error => tracing::error!(
                target: "favhub::audit", %service, %operation, user_id, event_id, "{message}"
            ),
        }
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{event, user};
    use favhub_domain::favorite::Favorite;

    #[tokio::test]
    async fn should_accept_every_level() {
        let sink = TracingLogSink;
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            let mut record = LogRecord::info(
                "favorites",
                "new_fav",
                Favorite::new(user("u1"), event("e1")),
                "Saving favorite",
            );
            record.level = level;
            assert!(sink.log(record).await.is_ok());
        }
    }
}
