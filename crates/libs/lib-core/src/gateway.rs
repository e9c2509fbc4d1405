//! # Chain Gateway
//!
//! Chain queries and transaction submission are provided by an external SDK
//! (PAPI and the ink! SDK in the browser). The core consumes them through
//! [`ChainGateway`] and never caches what it returns.

use std::collections::HashMap;

use async_trait::async_trait;
use shared::{format_balance, Account, ContractCall, TxOutcome};
use tracing::debug;

use crate::config::NetworkInfo;
use crate::error::Result;

/// Typed access to one chain.
#[async_trait(?Send)]
pub trait ChainGateway {
    /// Signing capability accepted by [`sign_and_submit`](Self::sign_and_submit).
    type Signer;

    /// Whether the chain API is initialised and can take requests.
    fn is_ready(&self) -> bool {
        true
    }

    /// Free balance per address, in the chain's smallest unit.
    async fn free_balances(&self, addresses: &[String]) -> Result<HashMap<String, u128>>;

    /// Sign `call` with `signer` and submit it; resolves once included.
    async fn sign_and_submit(&self, call: &ContractCall, signer: &Self::Signer) -> Result<TxOutcome>;
}

/// Free balances of the candidate accounts they were fetched for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceView {
    addresses: Vec<String>,
    balances: HashMap<String, u128>,
}

impl BalanceView {
    /// Whether this view was fetched for exactly `accounts`, in order.
    /// A view that fails this check is stale and should be dropped.
    pub fn is_for(&self, accounts: &[Account]) -> bool {
        self.addresses.len() == accounts.len()
            && self.addresses.iter().zip(accounts).all(|(a, acc)| *a == acc.address)
    }

    pub fn free(&self, address: &str) -> Option<u128> {
        self.balances.get(address).copied()
    }

    /// Formatted free balance, `"-"` while unknown.
    pub fn display(&self, address: &str, network: &NetworkInfo) -> String {
        match self.free(address) {
            Some(free) => format_balance(free, network.decimals, &network.symbol),
            None => "-".to_string(),
        }
    }
}

/// Fetch free balances for `accounts`. No request is made for an empty list.
pub async fn fetch_balances<G: ChainGateway>(gateway: &G, accounts: &[Account]) -> Result<BalanceView> {
    if accounts.is_empty() {
        return Ok(BalanceView::default());
    }

    let addresses: Vec<String> = accounts.iter().map(|a| a.address.clone()).collect();
    let balances = gateway.free_balances(&addresses).await?;
    debug!("Fetched {} balance(s)", balances.len());

    Ok(BalanceView { addresses, balances })
}
