use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Error, RpcError};

use super::connection::{endpoint_url, parse_base_url};
use super::protocol::{
    id_matches, parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION,
};
use super::RpcTransport;

/// HTTP JSON-RPC request engine.
///
/// Every call allocates the next request id, POSTs one envelope to
/// `{base_url}/{api_key}` and unpacks the response. Ids start at 1 and
/// increase by one per call for the lifetime of the engine.
pub struct HttpClient {
    config: Config,
    client: reqwest::Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl HttpClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        parse_base_url(config.base_url())?;
        let endpoint = endpoint_url(config.base_url(), config.api_key());

        let client = match config.http_client() {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(config.effective_timeout())
                .pool_max_idle_per_host(32)
                .tcp_nodelay(true)
                .build()
                .map_err(|e| Error::Config(format!("build HTTP client: {e}")))?,
        };

        debug!(
            network = config.network(),
            base_url = config.base_url(),
            "alchemy http client ready"
        );

        Ok(Self {
            config,
            client,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Perform a single JSON-RPC call and return its `result` payload.
    pub async fn do_request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, Error> {
        let id = self.next_request_id();
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );

        let req = JsonRpcRequest::new(id, method, &params);
        let body = serde_json::to_vec(&req).map_err(RpcError::Encode)?;

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body);
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();

        let body = response.text().await.map_err(transport_error)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        if status != StatusCode::OK {
            return Err(RpcError::Status { status, body }.into());
        }

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err).into());
        }

        if let Some(resp_id) = decoded.id.as_ref().filter(|v| !v.is_null()) {
            if !id_matches(resp_id, id) {
                warn!(
                    rpc.id = id,
                    rpc.method = method,
                    response_id = %resp_id,
                    "response id does not match request id"
                );
            }
        }
        if decoded.jsonrpc.as_deref().is_some_and(|v| v != JSONRPC_VERSION) {
            warn!(
                rpc.id = id,
                rpc.method = method,
                jsonrpc = ?decoded.jsonrpc,
                "unexpected jsonrpc version in response"
            );
        }

        Ok(decoded.result)
    }
}

// reqwest errors render the request URL, and the URL path is the API key.
fn transport_error(err: reqwest::Error) -> RpcError {
    RpcError::Transport(err.without_url())
}

#[async_trait]
impl RpcTransport for HttpClient {
    async fn request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, Error> {
        self.do_request(method, params).await
    }
}
