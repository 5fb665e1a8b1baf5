use std::fmt;

use reqwest::StatusCode;

/// Errors surfaced by the client and its endpoint namespaces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("empty result from API for {method}")]
    EmptyResult { method: &'static str },

    #[error("decode {method} result: {error}")]
    Decode {
        method: &'static str,
        error: serde_json::Error,
    },

    #[error("invalid token balance: {0}")]
    InvalidBalance(String),
}

impl Error {
    /// The JSON-RPC error object returned by the API, if that is what failed.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Rpc(RpcError::Api(err)) => Some(err),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.api_error().is_some()
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Rpc(RpcError::Api(err))
    }
}

// ==============================================================================
// Transport-level failures
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("encode JSON-RPC request: {0}")]
    Encode(serde_json::Error),

    /// Send or read failure. Carries no URL, since the URL path holds the
    /// API key.
    #[error("HTTP transport error: {0}")]
    Transport(reqwest::Error),

    #[error("unexpected status code: {status}, body: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Api(ApiError),
}

/// A JSON-RPC error object, as reported by the remote service.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ApiError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(
                f,
                "alchemy error {}: {} (data: {data})",
                self.code, self.message
            ),
            None => write!(f, "alchemy error {}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}
