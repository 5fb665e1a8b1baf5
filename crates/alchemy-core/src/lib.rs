pub mod client;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod rpc;
pub mod token;
pub mod types;

pub use client::AlchemyClient;
pub use config::Config;
pub use error::{ApiError, Error, RpcError};
pub use types::{ContractFilter, TokenBalance, TokenBalancesResponse, TokenHolding, TokenMetadata};
