mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;
use serde::Serialize;

use alchemy_core::{AlchemyClient, Config};

use cli::{contract_filter, Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let client = AlchemyClient::with_config(build_config(&args))
        .wrap_err("while configuring the Alchemy client")?;
    tracing::debug!(config = ?client.config(), "client configured");

    match args.command {
        Command::Balances {
            owner,
            contracts,
            default_tokens,
        } => {
            let filter = contract_filter(&contracts, default_tokens);
            let balances = client
                .token()
                .get_token_balances(&owner, &filter)
                .await
                .wrap_err_with(|| format!("fetch token balances for {owner}"))?;
            print_json(&balances)
        }
        Command::Metadata { contract } => {
            let metadata = client
                .token()
                .get_metadata(&contract)
                .await
                .wrap_err_with(|| format!("fetch token metadata for {contract}"))?;
            print_json(&metadata)
        }
        Command::Owners { contract } => {
            let owners = client
                .token()
                .get_owners(&contract)
                .await
                .wrap_err_with(|| format!("fetch owners of {contract}"))?;
            print_json(&owners)
        }
        Command::Holdings { owner, contracts } => {
            let filter = contract_filter(&contracts, false);
            let holdings = client
                .portfolio()
                .get_token_holdings(&owner, &filter)
                .await
                .wrap_err_with(|| format!("resolve token holdings for {owner}"))?;
            tracing::info!(owner = %owner, holdings = holdings.len(), "resolved holdings");
            print_json(&holdings)
        }
    }
}

fn build_config(args: &Cli) -> Config {
    let mut config = Config::new(args.api_key.clone());
    if let Some(network) = &args.network {
        config = config.with_network(network);
    }
    // Applied after the network so an explicit URL wins.
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("render JSON output")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_flag_wins_over_network() {
        let args = Cli::try_parse_from([
            "alchemy",
            "--api-key",
            "k",
            "--network",
            "polygon-mainnet",
            "--base-url",
            "http://127.0.0.1:8545/v2",
            "owners",
            "0xtoken",
        ])
        .expect("args must parse");
        let config = build_config(&args);
        assert_eq!(config.network(), "polygon-mainnet");
        assert_eq!(config.base_url(), "http://127.0.0.1:8545/v2");
    }

    #[test]
    fn timeout_flag_sets_request_timeout() {
        let args = Cli::try_parse_from([
            "alchemy",
            "--api-key",
            "k",
            "--timeout-secs",
            "3",
            "metadata",
            "0xtoken",
        ])
        .expect("args must parse");
        assert_eq!(build_config(&args).timeout(), Some(Duration::from_secs(3)));
    }
}
