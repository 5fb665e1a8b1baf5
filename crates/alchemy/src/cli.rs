use clap::{Parser, Subcommand};

use alchemy_core::types::DEFAULT_TOKENS_SENTINEL;
use alchemy_core::ContractFilter;

/// Alchemy token API from the command line. Results print as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Alchemy API key.
    #[arg(long, env = "ALCHEMY_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Network name, e.g. `eth-mainnet` or `polygon-mainnet`. Rewrites the
    /// base URL.
    #[arg(long, env = "ALCHEMY_NETWORK")]
    pub network: Option<String>,

    /// Explicit base URL; wins over `--network`.
    #[arg(long, env = "ALCHEMY_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// ERC-20 balances of an owner address.
    Balances {
        owner: String,

        /// Restrict to these token contracts (repeatable).
        #[arg(long = "contract")]
        contracts: Vec<String>,

        /// Query the provider's default token list instead.
        #[arg(long, conflicts_with = "contracts")]
        default_tokens: bool,
    },

    /// Name, symbol, decimals and logo of a token contract.
    Metadata { contract: String },

    /// Owners of a token contract.
    Owners { contract: String },

    /// Non-zero balances of an owner, joined with token metadata.
    Holdings {
        owner: String,

        #[arg(long = "contract")]
        contracts: Vec<String>,
    },
}

pub fn contract_filter(contracts: &[String], default_tokens: bool) -> ContractFilter {
    if default_tokens {
        return ContractFilter::from_addresses([DEFAULT_TOKENS_SENTINEL]);
    }
    ContractFilter::from_addresses(contracts.iter().cloned())
}
