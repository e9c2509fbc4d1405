//! Connected wallet session.

use chrono::{DateTime, Utc};
use shared::{Account, WalletInfo};

use super::host::EnabledWallet;

/// A live connection to one wallet extension.
///
/// Owned by the [`WalletConnector`](super::WalletConnector); everything else
/// gets a shared reference.
#[derive(Debug, Clone)]
pub struct WalletSession<Sig> {
    wallet: WalletInfo,
    signer: Sig,
    accounts: Vec<Account>,
    connected_at: DateTime<Utc>,
}

impl<Sig> WalletSession<Sig> {
    pub(crate) fn open(enabled: EnabledWallet<Sig>) -> Self {
        Self {
            wallet: enabled.wallet,
            signer: enabled.signer,
            accounts: enabled.accounts,
            connected_at: lib_utils::now_utc(),
        }
    }

    pub fn wallet_id(&self) -> &str {
        &self.wallet.id
    }

    pub fn label(&self) -> &str {
        &self.wallet.label
    }

    pub fn icon(&self) -> Option<&str> {
        self.wallet.icon.as_deref()
    }

    pub fn signer(&self) -> &Sig {
        &self.signer
    }

    /// Accounts in the order the extension reported them.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Replace the account list wholesale.
    pub(crate) fn replace_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }
}
