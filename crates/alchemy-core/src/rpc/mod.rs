//! JSON-RPC transport layer.
//!
//! Defines the [`RpcTransport`] trait the endpoint namespaces call through,
//! the HTTP implementation ([`HttpClient`]) and a test mock
//! (`mock::MockTransport`).

mod connection;
mod http_client;
#[cfg(test)]
pub mod mock;
pub mod protocol;

pub use http_client::HttpClient;

use async_trait::async_trait;

use crate::error::Error;

/// One JSON-RPC call, one round trip.
///
/// Returns the `result` payload, or `None` when the response carried no
/// result (absent or `null`). JSON-RPC error objects surface as
/// [`crate::error::RpcError::Api`].
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, Error>;
}
