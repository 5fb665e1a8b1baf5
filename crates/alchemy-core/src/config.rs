//! Client configuration.
//!
//! A [`Config`] is assembled once, through its `with_*` option methods, and
//! handed to the client. Options apply in call order: a later
//! [`Config::with_base_url`] or [`Config::with_network`] overrides whatever
//! an earlier one set.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_NETWORK: &str = "eth-mainnet";
pub const DEFAULT_BASE_URL: &str = "https://eth-mainnet.g.alchemy.com/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    network: String,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            network: DEFAULT_NETWORK.to_owned(),
            http_client: None,
            timeout: None,
        }
    }

    /// Point the client at a custom endpoint, e.g. a proxy or a local stub.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a caller-provided `reqwest::Client` for all requests.
    ///
    /// The client's own timeout applies unless [`Config::with_timeout`] is
    /// also set.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Select a network (`eth-mainnet`, `polygon-mainnet`, ...). Rewrites the
    /// base URL to that network's endpoint.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = network.into();
        self.base_url = base_url_for_network(&self.network);
        self
    }

    /// Per-request timeout, applied on top of whichever HTTP client is used.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Explicitly configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Timeout in effect for the default transport.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

// API keys travel in the URL path, so keep them out of `{:?}` output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("network", &self.network)
            .field("custom_http_client", &self.http_client.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn base_url_for_network(network: &str) -> String {
    format!("https://{network}.g.alchemy.com/v2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_eth_mainnet() {
        let config = Config::new("key");
        assert_eq!(config.api_key(), "key");
        assert_eq!(config.network(), DEFAULT_NETWORK);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.effective_timeout(), Duration::from_secs(30));
        assert!(config.http_client().is_none());
    }

    #[test]
    fn network_rewrites_base_url() {
        let config = Config::new("key").with_network("polygon-mainnet");
        assert_eq!(config.network(), "polygon-mainnet");
        assert_eq!(
            config.base_url(),
            "https://polygon-mainnet.g.alchemy.com/v2"
        );
    }

    #[test]
    fn options_apply_in_call_order() {
        let url_last = Config::new("key")
            .with_network("base-mainnet")
            .with_base_url("http://127.0.0.1:9000");
        assert_eq!(url_last.base_url(), "http://127.0.0.1:9000");
        assert_eq!(url_last.network(), "base-mainnet");

        let network_last = Config::new("key")
            .with_base_url("http://127.0.0.1:9000")
            .with_network("opt-mainnet");
        assert_eq!(
            network_last.base_url(),
            "https://opt-mainnet.g.alchemy.com/v2"
        );
    }

    #[test]
    fn timeout_is_recorded() {
        let config = Config::new("key").with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.effective_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = Config::new("super-secret-key");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
