//! Log sink port — the centralized logging collaborator.

use std::future::Future;

use favhub_domain::error::FavoritesError;
use favhub_domain::log_record::LogRecord;

/// Accepts structured log records. Callers treat it as fire-and-forget.
pub trait LogSink {
    fn log(&self, record: LogRecord) -> impl Future<Output = Result<(), FavoritesError>> + Send;
}

impl<T: LogSink + Send + Sync> LogSink for std::sync::Arc<T> {
    fn log(&self, record: LogRecord) -> impl Future<Output = Result<(), FavoritesError>> + Send {
        (**self).log(record)
    }
}
