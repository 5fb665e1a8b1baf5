//! Typed records for the token endpoints.
//!
//! Field names mirror the remote JSON schema (`camelCase`); optional fields
//! are `Option`s because the API omits or nulls them freely.

use alloy_primitives::utils::format_units;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Filter keyword selecting every ERC-20 the owner has touched.
pub const ERC20_SENTINEL: &str = "erc20";

/// Filter keyword selecting the top tokens by 24h volume.
pub const DEFAULT_TOKENS_SENTINEL: &str = "DEFAULT_TOKENS";

// ==============================================================================
// Contract Filter
// ==============================================================================

/// Which token contracts `alchemy_getTokenBalances` should report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContractFilter {
    /// All ERC-20 tokens.
    #[default]
    Erc20,
    /// The provider's default token list.
    DefaultTokens,
    /// Explicit contract addresses.
    Contracts(Vec<String>),
}

impl ContractFilter {
    /// Shape a caller-supplied address list into a filter.
    ///
    /// No addresses selects [`ContractFilter::Erc20`]; a lone
    /// `DEFAULT_TOKENS` keyword selects [`ContractFilter::DefaultTokens`];
    /// anything else is taken as a contract list.
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses: Vec<String> = addresses.into_iter().map(Into::into).collect();
        match addresses.as_slice() {
            [] => Self::Erc20,
            [only] if only == DEFAULT_TOKENS_SENTINEL => Self::DefaultTokens,
            _ => Self::Contracts(addresses),
        }
    }

    /// The second positional param of `alchemy_getTokenBalances`.
    ///
    /// An empty contract list sends the ERC-20 keyword, and a list holding
    /// only `DEFAULT_TOKENS` sends that keyword, however the filter was built.
    pub fn to_param(&self) -> serde_json::Value {
        match self {
            Self::Erc20 => serde_json::json!(ERC20_SENTINEL),
            Self::DefaultTokens => serde_json::json!(DEFAULT_TOKENS_SENTINEL),
            Self::Contracts(addresses) => match addresses.as_slice() {
                [] => serde_json::json!(ERC20_SENTINEL),
                [only] if only == DEFAULT_TOKENS_SENTINEL => {
                    serde_json::json!(DEFAULT_TOKENS_SENTINEL)
                }
                _ => serde_json::json!(addresses),
            },
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ContractFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_addresses(iter)
    }
}

// ==============================================================================
// Token Balances
// ==============================================================================

/// Result of `alchemy_getTokenBalances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResponse {
    pub address: String,
    #[serde(default)]
    pub token_balances: Vec<TokenBalance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub contract_address: String,
    /// Hex-encoded raw balance; `null` when the provider could not read it.
    #[serde(default)]
    pub token_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenBalance {
    /// Parse the hex balance. `Ok(None)` when the balance is null.
    pub fn balance(&self) -> Result<Option<U256>, Error> {
        self.token_balance.as_deref().map(parse_hex_u256).transpose()
    }

    /// True for a present balance equal to zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.balance(), Ok(Some(b)) if b.is_zero())
    }
}

fn parse_hex_u256(raw: &str) -> Result<U256, Error> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| Error::InvalidBalance(format!("missing 0x prefix: {raw}")))?;
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16).map_err(|e| Error::InvalidBalance(format!("{raw}: {e}")))
}

// ==============================================================================
// Token Metadata
// ==============================================================================

/// Result of `alchemy_getTokenMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Result of `alchemy_getOwnersForToken`, kept as the raw JSON object
/// (`owners`, `pageKey`, ...).
pub type TokenOwners = serde_json::Map<String, serde_json::Value>;

// ==============================================================================
// Holdings
// ==============================================================================

/// A non-zero token balance joined with the token's metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    pub contract_address: String,
    pub balance: U256,
    /// `balance` scaled by the token's decimals; the raw integer when
    /// decimals are unknown.
    pub formatted: String,
    pub metadata: TokenMetadata,
}

impl TokenHolding {
    pub fn new(contract_address: String, balance: U256, metadata: TokenMetadata) -> Self {
        let formatted = format_balance(balance, metadata.decimals);
        Self {
            contract_address,
            balance,
            formatted,
            metadata,
        }
    }
}

pub fn format_balance(balance: U256, decimals: Option<u32>) -> String {
    match decimals.and_then(|d| u8::try_from(d).ok()) {
        Some(d) if d > 0 => format_units(balance, d).unwrap_or_else(|_| balance.to_string()),
        _ => balance.to_string(),
    }
}
