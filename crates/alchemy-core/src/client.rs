use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::portfolio::PortfolioApi;
use crate::rpc::HttpClient;
use crate::token::TokenApi;

/// Entry point: owns the request engine and hands out the API namespaces.
///
/// ```no_run
/// # async fn run() -> Result<(), alchemy_core::Error> {
/// use alchemy_core::{AlchemyClient, Config, ContractFilter};
///
/// let client = AlchemyClient::with_config(Config::new("demo").with_network("eth-mainnet"))?;
/// let balances = client
///     .token()
///     .get_token_balances("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045", &ContractFilter::Erc20)
///     .await?;
/// println!("{} balances", balances.token_balances.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AlchemyClient {
    http: Arc<HttpClient>,
    token: TokenApi,
    portfolio: PortfolioApi,
}

impl AlchemyClient {
    /// Client with default settings for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Result<Self, Error> {
        let http = Arc::new(HttpClient::new(config)?);
        let token = TokenApi::new(http.clone());
        let portfolio = PortfolioApi::new(token.clone());
        Ok(Self {
            http,
            token,
            portfolio,
        })
    }

    pub fn token(&self) -> &TokenApi {
        &self.token
    }

    pub fn portfolio(&self) -> &PortfolioApi {
        &self.portfolio
    }

    /// The underlying request engine, for calling methods without a wrapper.
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    pub fn config(&self) -> &Config {
        self.http.config()
    }
}
