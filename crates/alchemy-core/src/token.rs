//! Token API namespace: balances, metadata and owners.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::rpc::RpcTransport;
use crate::types::{ContractFilter, TokenBalancesResponse, TokenMetadata, TokenOwners};

pub const GET_TOKEN_BALANCES: &str = "alchemy_getTokenBalances";
pub const GET_TOKEN_METADATA: &str = "alchemy_getTokenMetadata";
pub const GET_OWNERS_FOR_TOKEN: &str = "alchemy_getOwnersForToken";

#[derive(Clone)]
pub struct TokenApi {
    rpc: Arc<dyn RpcTransport>,
}

impl TokenApi {
    pub fn new(rpc: Arc<dyn RpcTransport>) -> Self {
        Self { rpc }
    }

    /// ERC-20 balances held by `owner`, restricted by `filter`.
    pub async fn get_token_balances(
        &self,
        owner: &str,
        filter: &ContractFilter,
    ) -> Result<TokenBalancesResponse, Error> {
        let params = vec![serde_json::json!(owner), filter.to_param()];
        let result = self.rpc.request(GET_TOKEN_BALANCES, params).await?;
        let balances: TokenBalancesResponse = decode_required(GET_TOKEN_BALANCES, result)?;
        debug!(
            owner,
            balances = balances.token_balances.len(),
            "fetched token balances"
        );
        Ok(balances)
    }

    pub async fn get_metadata(&self, contract: &str) -> Result<TokenMetadata, Error> {
        let result = self
            .rpc
            .request(GET_TOKEN_METADATA, vec![serde_json::json!(contract)])
            .await?;
        decode_required(GET_TOKEN_METADATA, result)
    }

    /// Owners of `contract`. A response without a result is an empty map.
    pub async fn get_owners(&self, contract: &str) -> Result<TokenOwners, Error> {
        let result = self
            .rpc
            .request(GET_OWNERS_FOR_TOKEN, vec![serde_json::json!(contract)])
            .await?;
        match result {
            None => Ok(TokenOwners::new()),
            Some(value) => decode(GET_OWNERS_FOR_TOKEN, value),
        }
    }
}

fn decode_required<T: DeserializeOwned>(
    method: &'static str,
    result: Option<serde_json::Value>,
) -> Result<T, Error> {
    let value = result.ok_or(Error::EmptyResult { method })?;
    decode(method, value)
}

fn decode<T: DeserializeOwned>(method: &'static str, value: serde_json::Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|error| Error::Decode { method, error })
}
