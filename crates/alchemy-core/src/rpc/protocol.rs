use crate::error::{ApiError, RpcError};

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, serde::Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [serde_json::Value],
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a [serde_json::Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Response envelope. `result: null` and an absent `result` both decode to
/// `None`.
#[derive(Debug, serde::Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a typed error.
///
/// Errors shaped like `{"code": <int>, "message": <string>, "data"?: <any>}`
/// become [`RpcError::Api`]; anything else is reported as an invalid
/// response carrying the raw JSON.
pub fn parse_jsonrpc_error(err: serde_json::Value) -> RpcError {
    match serde_json::from_value::<ApiError>(err.clone()) {
        Ok(parsed) => RpcError::Api(parsed),
        Err(_) => RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}")),
    }
}

/// Whether a response `id` refers to the request that was sent. Some
/// gateways echo numeric ids back as strings.
pub fn id_matches(id: &serde_json::Value, expected: u64) -> bool {
    match id {
        serde_json::Value::Number(n) => n.as_u64() == Some(expected),
        serde_json::Value::String(s) => s.parse::<u64>().ok() == Some(expected),
        _ => false,
    }
}
