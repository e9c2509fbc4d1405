//! # Core Library
//!
//! Wallet connection state, account selection, configuration and the
//! contract call assembly for the dApp. Everything here runs natively and in
//! the browser; browser capabilities (wallet extensions, chain SDK, storage)
//! come in through traits.

pub mod config;
pub mod error;
pub mod fund;
pub mod gateway;
pub mod model;
pub mod wallet;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{Config, NetworkInfo};
pub use error::{AppError, Result};
pub use fund::{prepare_fund, submit_fund, FundForm, FundSettings};
pub use gateway::{fetch_balances, BalanceView, ChainGateway};
pub use model::store::{KeyValueStore, MemoryStore};
pub use wallet::{
    AccountSelector, ConnectOutcome, EnabledWallet, ExtensionHost, RestoreOutcome, WalletConnector,
    WalletSession,
};
