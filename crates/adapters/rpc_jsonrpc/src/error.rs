//! JSON-RPC error objects and their mapping from [`FavoritesError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use favhub_domain::error::FavoritesError;

/// Standard JSON-RPC 2.0 error codes plus the server range used here.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub const RESOURCE_NOT_FOUND: i32 = -32001;
}

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {details}"))
    }

    pub fn invalid_request(details: impl std::fmt::Display) -> Self {
        Self::new(codes::INVALID_REQUEST, format!("Invalid request: {details}"))
    }

    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::new(codes::METHOD_NOT_FOUND, format!("Method not found: {method}"))
    }

    pub fn invalid_params(details: impl std::fmt::Display) -> Self {
        Self::new(codes::INVALID_PARAMS, format!("Invalid params: {details}"))
    }
}

impl From<FavoritesError> for RpcError {
    fn from(err: FavoritesError) -> Self {
        match err {
            FavoritesError::Validation(err) => Self::invalid_params(err),
            FavoritesError::UndefinedMembership(err) => {
                Self::new(codes::RESOURCE_NOT_FOUND, err.to_string())
                    .with_data(serde_json::json!({ "user_id": err.user_id }))
            }
            FavoritesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                Self::new(codes::INTERNAL_ERROR, "Internal error")
            }
        }
    }
}
