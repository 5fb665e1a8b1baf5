//! Portfolio API namespace.
//!
//! Builds owner-centric views on top of the token endpoints: the raw
//! balance sheet, and the non-zero holdings joined with token metadata.

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::error::Error;
use crate::token::TokenApi;
use crate::types::{ContractFilter, TokenBalancesResponse, TokenHolding};

#[derive(Clone)]
pub struct PortfolioApi {
    token: TokenApi,
}

impl PortfolioApi {
    pub fn new(token: TokenApi) -> Self {
        Self { token }
    }

    /// Every ERC-20 balance reported for `owner`.
    pub async fn get_token_balances(&self, owner: &str) -> Result<TokenBalancesResponse, Error> {
        self.token
            .get_token_balances(owner, &ContractFilter::Erc20)
            .await
    }

    /// Non-zero balances of `owner`, each joined with its token metadata.
    ///
    /// Entries the provider flagged with an error, or whose balance is null,
    /// zero or not valid hex, are skipped. Metadata is fetched once per remaining contract.
    pub async fn get_token_holdings(
        &self,
        owner: &str,
        filter: &ContractFilter,
    ) -> Result<Vec<TokenHolding>, Error> {
        let balances = self.token.get_token_balances(owner, filter).await?;

        let mut held = Vec::with_capacity(balances.token_balances.len());
        for entry in balances.token_balances {
            if let Some(err) = &entry.error {
                warn!(contract = %entry.contract_address, error = %err, "skipping errored balance");
                continue;
            }
            match entry.balance() {
                Ok(Some(balance)) if !balance.is_zero() => {
                    held.push((entry.contract_address, balance))
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(contract = %entry.contract_address, error = %err, "skipping unparsable balance");
                }
            }
        }
        debug!(owner, holdings = held.len(), "resolving token metadata");

        let metadata_futures: Vec<_> = held
            .iter()
            .map(|(contract, _)| self.token.get_metadata(contract))
            .collect();
        let metadata = try_join_all(metadata_futures).await?;

        Ok(held
            .into_iter()
            .zip(metadata)
            .map(|((contract, balance), metadata)| TokenHolding::new(contract, balance, metadata))
            .collect())
    }
}
