//! # Wallet Extension Seam
//!
//! Discovery and authorisation of browser wallet extensions are provided by
//! the browser (`window.injectedWeb3`). The core only sees this trait; the
//! browser implementation lives in `wallet-web`, tests use an in-memory fake.

use async_trait::async_trait;
use shared::{Account, WalletInfo};

use crate::error::Result;

/// What an extension hands back once the user authorised the dApp.
#[derive(Debug, Clone)]
pub struct EnabledWallet<Sig> {
    pub wallet: WalletInfo,
    pub accounts: Vec<Account>,
    pub signer: Sig,
}

/// Access to the wallet extensions installed in the browser.
#[async_trait(?Send)]
pub trait ExtensionHost {
    /// Opaque signing capability handed to the chain gateway.
    type Signer: Clone;

    /// Extensions for the selection list, installed ones flagged.
    fn available_wallets(&self) -> Vec<WalletInfo>;

    /// Ask the extension for access.
    ///
    /// `Ok(None)` means the user rejected or closed the prompt.
    async fn enable(&self, wallet_id: &str) -> Result<Option<EnabledWallet<Self::Signer>>>;

    /// Whether the extension is currently injected.
    fn is_installed(&self, wallet_id: &str) -> bool {
        self.available_wallets()
            .iter()
            .any(|w| w.installed && w.id == wallet_id)
    }
}
