//! Log record — the structured entry handed to the centralized logging sink.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::favorite::Favorite;

/// Severity understood by the logging sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        })
    }
}

/// `(service_name, operation_name, payload, level, message)` as sent to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub service: String,
    pub operation: String,
    pub payload: Favorite,
    pub level: LogLevel,
    pub message: String,
}

impl LogRecord {
    /// Informational record emitted before a mutating operation.
    #[must_use]
    pub fn info(
        service: impl Into<String>,
        operation: impl Into<String>,
        payload: Favorite,
        message: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            payload,
            level: LogLevel::Info,
            message: message.into(),
        }
    }
}
