//! # Wallet Connector
//!
//! Owns the wallet session, the account selector and the two persisted keys.
//!
//! ## Lifecycle
//!
//! ```text
//!            connect / restore             sign_out / extension_disconnected
//!  (none) ───────────────────────▶ session ──────────────────────────────────▶ (none)
//!                                     │  ▲
//!                                     └──┘ accounts_changed (list replaced, selection reconciled)
//! ```
//!
//! Every operation that awaits the extension is split in two: a `begin_*`
//! check and a `finish_*` that applies the extension's answer. [`connect`]
//! and [`restore`] chain them for callers that can hold `&mut self` across an
//! await; event-driven shells await [`ExtensionHost::enable`] themselves and
//! call the `finish_*` half afterwards.
//!
//! [`connect`]: WalletConnector::connect
//! [`restore`]: WalletConnector::restore

use shared::{Account, WalletInfo};
use tracing::{debug, info, warn};

use super::host::{EnabledWallet, ExtensionHost};
use super::selector::{candidates, AccountSelector};
use super::session::WalletSession;
use crate::error::{AppError, Result};
use crate::model::store::{load_json, save_json, KeyValueStore, CONNECTED_ACCOUNT, LAST_CONNECTED_WALLET};

/// Result of a connect attempt. Only `Connected` changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    /// No wallet extension is installed at all
    NoExtensions,
    /// The chosen extension is not installed
    Unavailable,
    /// The user rejected or closed the extension prompt
    Cancelled,
}

/// Result of restore-on-load. Only `Restored` changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No wallet was connected before
    NothingToRestore,
    Restored,
    /// The last wallet's extension is gone
    Unavailable,
    /// The extension refused or failed; logged
    Failed,
}

/// Wallet connection state for one browser tab.
pub struct WalletConnector<H: ExtensionHost, S: KeyValueStore> {
    host: H,
    store: S,
    session: Option<WalletSession<H::Signer>>,
    selector: AccountSelector,
}

impl<H: ExtensionHost, S: KeyValueStore> WalletConnector<H, S> {
    /// Create a connector with no session, seeded with the persisted selection.
    ///
    /// The persisted selection is only reconciled once a session exists, so a
    /// reload does not lose it while the wallet is being restored.
    pub fn new(host: H, store: S) -> Self {
        let persisted = match load_json::<Account>(&store, CONNECTED_ACCOUNT) {
            Ok(account) => account,
            Err(e) => {
                warn!("Ignoring persisted account selection: {}", e);
                None
            }
        };

        Self {
            host,
            store,
            session: None,
            selector: AccountSelector::new(persisted),
        }
    }

    // region:    --- Accessors

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn session(&self) -> Option<&WalletSession<H::Signer>> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Candidate accounts, empty without a session.
    pub fn accounts(&self) -> &[Account] {
        candidates(self.session.as_ref())
    }

    /// The active account. Always `None` without a session.
    pub fn selected_account(&self) -> Option<&Account> {
        self.session.as_ref().and(self.selector.selected())
    }

    pub fn signer(&self) -> Option<&H::Signer> {
        self.session.as_ref().map(|s| s.signer())
    }

    pub fn available_wallets(&self) -> Vec<WalletInfo> {
        self.host.available_wallets()
    }

    /// Wallet id persisted by the last successful connect.
    pub fn last_wallet_id(&self) -> Option<String> {
        match self.store.get(LAST_CONNECTED_WALLET) {
            Ok(id) => id.filter(|id| !id.is_empty()),
            Err(e) => {
                warn!("Failed to read last connected wallet: {}", e);
                None
            }
        }
    }

    /// Give the store back (e.g. to simulate a reload).
    pub fn into_store(self) -> S {
        self.store
    }

    // endregion: --- Accessors

    // region:    --- Connect

    /// Run the authorisation flow for the wallet the user picked.
    pub async fn connect(&mut self, wallet_id: &str) -> Result<ConnectOutcome> {
        if let Err(outcome) = self.begin_connect(wallet_id) {
            return Ok(outcome);
        }
        let answer = self.host.enable(wallet_id).await;
        self.finish_connect(wallet_id, answer)
    }

    /// Check that `wallet_id` can be enabled. `Err` carries the no-op outcome.
    pub fn begin_connect(&self, wallet_id: &str) -> std::result::Result<(), ConnectOutcome> {
        let wallets = self.host.available_wallets();

        if !wallets.iter().any(|w| w.installed) {
            info!("Connect requested but no wallet extension is installed");
            return Err(ConnectOutcome::NoExtensions);
        }
        if !wallets.iter().any(|w| w.installed && w.id == wallet_id) {
            info!("Connect requested for {} which is not installed", wallet_id);
            return Err(ConnectOutcome::Unavailable);
        }
        Ok(())
    }

    /// Apply the extension's answer to a connect request.
    pub fn finish_connect(
        &mut self,
        wallet_id: &str,
        answer: Result<Option<EnabledWallet<H::Signer>>>,
    ) -> Result<ConnectOutcome> {
        match answer? {
            Some(enabled) => {
                self.attach(enabled)?;
                Ok(ConnectOutcome::Connected)
            }
            None => {
                info!("User cancelled the {} authorisation prompt", wallet_id);
                Ok(ConnectOutcome::Cancelled)
            }
        }
    }

    /// Install a new session, replacing any previous one.
    ///
    /// Fails without touching the current session if the wallet id cannot be
    /// persisted. Once the session is installed, persisting the selection is
    /// best effort: the in-memory selection is still correct.
    pub fn attach(&mut self, enabled: EnabledWallet<H::Signer>) -> Result<()> {
        let session = WalletSession::open(enabled);
        self.store.set(LAST_CONNECTED_WALLET, session.wallet_id())?;

        info!(
            "Connected to {} with {} account(s)",
            session.wallet_id(),
            session.accounts().len()
        );
        self.session = Some(session);

        if let Err(e) = self.reconcile_and_persist() {
            warn!("Connected but failed to persist the account selection: {}", e);
        }
        Ok(())
    }

    // endregion: --- Connect

    // region:    --- Restore

    /// Re-establish the last wallet session on load. Never fails the caller:
    /// problems are logged and leave the connector without a session.
    pub async fn restore(&mut self) -> RestoreOutcome {
        let wallet_id = match self.begin_restore() {
            Ok(id) => id,
            Err(outcome) => return outcome,
        };
        let answer = self.host.enable(&wallet_id).await;
        self.finish_restore(&wallet_id, answer)
    }

    /// Find the wallet to restore. `Err` carries the no-op outcome.
    pub fn begin_restore(&self) -> std::result::Result<String, RestoreOutcome> {
        let Some(wallet_id) = self.last_wallet_id() else {
            debug!("No previous wallet session to restore");
            return Err(RestoreOutcome::NothingToRestore);
        };

        if !self.host.is_installed(&wallet_id) {
            warn!("Cannot restore wallet session: extension {} is not available", wallet_id);
            return Err(RestoreOutcome::Unavailable);
        }
        Ok(wallet_id)
    }

    /// Apply the extension's answer to a restore request.
    ///
    /// On failure the last-wallet key is kept so a later reload can retry.
    pub fn finish_restore(
        &mut self,
        wallet_id: &str,
        answer: Result<Option<EnabledWallet<H::Signer>>>,
    ) -> RestoreOutcome {
        let enabled = match answer {
            Ok(Some(enabled)) => enabled,
            Ok(None) => {
                warn!("Cannot restore wallet session: {} refused access", wallet_id);
                return RestoreOutcome::Failed;
            }
            Err(e) => {
                warn!("Cannot restore wallet session for {}: {}", wallet_id, e);
                return RestoreOutcome::Failed;
            }
        };

        match self.attach(enabled) {
            Ok(()) => RestoreOutcome::Restored,
            Err(e) => {
                warn!("Cannot restore wallet session for {}: {}", wallet_id, e);
                RestoreOutcome::Failed
            }
        }
    }

    // endregion: --- Restore

    // region:    --- Teardown

    /// Tear down the session and forget the persisted wallet and selection.
    /// No-op without a session.
    pub fn sign_out(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            debug!("Sign out requested without a session");
            return Ok(());
        };

        info!("Signed out of {}", session.wallet_id());
        self.selector.clear();
        self.remove_keys(&[LAST_CONNECTED_WALLET, CONNECTED_ACCOUNT])
    }

    /// Alias of [`sign_out`](Self::sign_out).
    pub fn disconnect(&mut self) -> Result<()> {
        self.sign_out()
    }

    /// The extension revoked access or went away.
    pub fn extension_disconnected(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };

        warn!("Wallet extension {} disconnected", session.wallet_id());
        if self.selector.reconcile(&[]) {
            self.remove_keys(&[LAST_CONNECTED_WALLET, CONNECTED_ACCOUNT])
        } else {
            self.remove_keys(&[LAST_CONNECTED_WALLET])
        }
    }

    /// Remove every key even if one fails; the first error is returned.
    fn remove_keys(&mut self, keys: &[&str]) -> Result<()> {
        let mut first_error = None;
        for key in keys {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove {}: {}", key, e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // endregion: --- Teardown

    // region:    --- Accounts

    /// The extension reported a new account list.
    pub fn accounts_changed(&mut self, accounts: Vec<Account>) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            debug!("Ignoring account update without a session");
            return Ok(());
        };

        debug!("{} now exposes {} account(s)", session.wallet_id(), accounts.len());
        session.replace_accounts(accounts);
        self.reconcile_and_persist()
    }

    /// Make `address` the active account and persist it.
    pub fn select_account(&mut self, address: &str) -> Result<&Account> {
        let Some(session) = self.session.as_ref() else {
            return Err(AppError::Precondition("Please connect a wallet first".to_string()));
        };

        let account = self.selector.select(session.accounts(), address)?;
        save_json(&mut self.store, CONNECTED_ACCOUNT, account)?;
        info!("Selected account {}", account.address);
        Ok(account)
    }

    fn reconcile_and_persist(&mut self) -> Result<()> {
        let candidates = candidates(self.session.as_ref());
        let changed = self.selector.reconcile(candidates);

        match self.selector.selected() {
            Some(account) if changed => save_json(&mut self.store, CONNECTED_ACCOUNT, account),
            None if changed => self.store.remove(CONNECTED_ACCOUNT),
            _ => Ok(()),
        }
    }

    // endregion: --- Accounts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::MemoryStore;
    use crate::testing::{FakeHost, FakeSigner, FlakyStore};

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    fn alice() -> Account {
        Account::new(ALICE).with_name("Alice")
    }

    fn bob() -> Account {
        Account::new(BOB).with_name("Bob")
    }

    fn connector(host: FakeHost) -> WalletConnector<FakeHost, MemoryStore> {
        WalletConnector::new(host, MemoryStore::default())
    }

    #[tokio::test]
    async fn test_connect_creates_session_and_selects_first_account() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let mut connector = connector(host);

        let outcome = connector.connect("subwallet-js").await.unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected);
        let session = connector.session().unwrap();
        assert_eq!(session.wallet_id(), "subwallet-js");
        assert_eq!(session.label(), "SubWallet");
        assert_eq!(connector.accounts(), &[alice(), bob()]);
        assert_eq!(connector.selected_account(), Some(&alice()));
        assert_eq!(connector.signer(), Some(&FakeSigner("subwallet-js".to_string())));
        assert_eq!(connector.last_wallet_id().as_deref(), Some("subwallet-js"));
    }

    #[tokio::test]
    async fn test_connect_without_extensions_is_a_no_op() {
        let mut connector = connector(FakeHost::default());

        let outcome = connector.connect("subwallet-js").await.unwrap();

        assert_eq!(outcome, ConnectOutcome::NoExtensions);
        assert!(!connector.is_connected());
        assert_eq!(connector.host().enable_calls(), 0);
        assert!(connector.into_store().is_empty());
    }

    #[tokio::test]
    async fn test_connect_to_missing_extension_is_a_no_op() {
        let host = FakeHost::with_wallet("talisman", vec![alice()]);
        let mut connector = connector(host);

        let outcome = connector.connect("polkadot-js").await.unwrap();

        assert_eq!(outcome, ConnectOutcome::Unavailable);
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn test_cancelled_prompt_keeps_state() {
        let host = FakeHost::with_wallet("talisman", vec![alice()]);
        host.cancel_next();
        let mut connector = connector(host);

        let outcome = connector.connect("talisman").await.unwrap();

        assert_eq!(outcome, ConnectOutcome::Cancelled);
        assert!(!connector.is_connected());
        assert_eq!(connector.last_wallet_id(), None);
    }

    #[tokio::test]
    async fn test_extension_failure_is_an_error() {
        let host = FakeHost::with_wallet("talisman", vec![alice()]);
        host.fail_next("extension locked");
        let mut connector = connector(host);

        let err = connector.connect("talisman").await.unwrap_err();

        assert!(matches!(err, AppError::Extension(_)));
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn test_disconnect_twice_equals_once() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();
        connector.select_account(BOB).unwrap();

        connector.disconnect().unwrap();
        let after_once = (connector.is_connected(), connector.selected_account().cloned());
        connector.disconnect().unwrap();
        let after_twice = (connector.is_connected(), connector.selected_account().cloned());

        assert_eq!(after_once, (false, None));
        assert_eq!(after_once, after_twice);
        assert!(connector.into_store().is_empty());
    }

    #[test]
    fn test_sign_out_without_session_is_a_no_op() {
        let mut connector = connector(FakeHost::default());
        connector.sign_out().unwrap();
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn test_selection_survives_reload() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let mut connector = connector(host.clone());
        connector.connect("subwallet-js").await.unwrap();
        connector.select_account(BOB).unwrap();

        // reload: fresh connector over the same storage and extension
        let store = connector.into_store();
        let mut reloaded = WalletConnector::new(host, store);
        assert_eq!(reloaded.selected_account(), None);

        let outcome = reloaded.restore().await;

        assert_eq!(outcome, RestoreOutcome::Restored);
        assert_eq!(reloaded.selected_account(), Some(&bob()));
    }

    #[tokio::test]
    async fn test_restore_with_missing_extension_stays_disconnected() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();
        let store = connector.into_store();

        let mut reloaded = WalletConnector::new(FakeHost::with_wallet("talisman", vec![bob()]), store);
        let outcome = reloaded.restore().await;

        assert_eq!(outcome, RestoreOutcome::Unavailable);
        assert!(!reloaded.is_connected());
        assert_eq!(reloaded.last_wallet_id().as_deref(), Some("subwallet-js"));
        assert_eq!(reloaded.host().enable_calls(), 0);
    }

    #[tokio::test]
    async fn test_restore_failure_is_not_fatal() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let mut connector = connector(host.clone());
        connector.connect("subwallet-js").await.unwrap();
        let store = connector.into_store();

        host.fail_next("extension crashed");
        let mut reloaded = WalletConnector::new(host, store);

        assert_eq!(reloaded.restore().await, RestoreOutcome::Failed);
        assert!(!reloaded.is_connected());
    }

    #[tokio::test]
    async fn test_restore_without_history() {
        let mut connector = connector(FakeHost::with_wallet("talisman", vec![alice()]));
        assert_eq!(connector.restore().await, RestoreOutcome::NothingToRestore);
    }

    #[tokio::test]
    async fn test_removed_account_falls_back_to_first() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();
        connector.select_account(BOB).unwrap();

        connector.accounts_changed(vec![alice()]).unwrap();

        assert_eq!(connector.selected_account(), Some(&alice()));
        let store = connector.into_store();
        assert_eq!(load_json::<Account>(&store, CONNECTED_ACCOUNT).unwrap(), Some(alice()));
    }

    #[tokio::test]
    async fn test_empty_account_list_clears_selection() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();

        connector.accounts_changed(Vec::new()).unwrap();

        assert!(connector.is_connected());
        assert_eq!(connector.selected_account(), None);
        assert_eq!(connector.into_store().get(CONNECTED_ACCOUNT).unwrap(), None);
    }

    #[tokio::test]
    async fn test_select_unknown_account_is_rejected() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();

        let err = connector.select_account("5Unknown").unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(connector.selected_account(), Some(&alice()));
    }

    #[test]
    fn test_select_without_session() {
        let mut connector = connector(FakeHost::default());
        let err = connector.select_account(ALICE).unwrap_err();
        assert!(err.is_precondition());
    }

    #[tokio::test]
    async fn test_extension_disconnect_drops_session() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let mut connector = connector(host);
        connector.connect("subwallet-js").await.unwrap();

        connector.extension_disconnected().unwrap();

        assert!(!connector.is_connected());
        assert_eq!(connector.selected_account(), None);
        assert_eq!(connector.last_wallet_id(), None);
        assert!(connector.into_store().is_empty());
    }

    #[tokio::test]
    async fn test_reconnect_to_other_wallet_replaces_session() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        host.add_wallet("talisman", vec![bob()]);
        let mut connector = connector(host);

        connector.connect("subwallet-js").await.unwrap();
        connector.connect("talisman").await.unwrap();

        assert_eq!(connector.session().unwrap().wallet_id(), "talisman");
        assert_eq!(connector.selected_account(), Some(&bob()));
        assert_eq!(connector.last_wallet_id().as_deref(), Some("talisman"));
    }

    #[test]
    fn test_corrupt_persisted_selection_is_ignored() {
        let mut store = MemoryStore::default();
        store.set(CONNECTED_ACCOUNT, "undefined").unwrap();

        let connector = WalletConnector::new(FakeHost::default(), store);

        assert_eq!(connector.selected_account(), None);
    }

    #[test]
    fn test_account_update_without_session_is_ignored() {
        let mut connector = connector(FakeHost::default());

        connector.accounts_changed(vec![alice()]).unwrap();

        assert!(!connector.is_connected());
        assert!(connector.accounts().is_empty());
        assert!(connector.into_store().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_forgets_wallet_when_selection_removal_fails() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let store = FlakyStore::default();
        let mut connector = WalletConnector::new(host.clone(), store.clone());
        connector.connect("subwallet-js").await.unwrap();
        store.fail_remove(CONNECTED_ACCOUNT);

        let err = connector.sign_out().unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(!connector.is_connected());
        assert_eq!(connector.last_wallet_id(), None);

        // reload: nothing to reconnect to
        let mut reloaded = WalletConnector::new(host, connector.into_store());
        assert_eq!(reloaded.restore().await, RestoreOutcome::NothingToRestore);
        assert!(!reloaded.is_connected());
    }

    #[tokio::test]
    async fn test_connect_succeeds_when_selection_cannot_be_saved() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice(), bob()]);
        let store = FlakyStore::default();
        store.fail_set(CONNECTED_ACCOUNT);
        let mut connector = WalletConnector::new(host, store);

        let outcome = connector.connect("subwallet-js").await.unwrap();

        assert_eq!(outcome, ConnectOutcome::Connected);
        assert_eq!(connector.selected_account(), Some(&alice()));
        assert_eq!(connector.last_wallet_id().as_deref(), Some("subwallet-js"));
    }

    #[tokio::test]
    async fn test_connect_fails_cleanly_when_wallet_id_cannot_be_saved() {
        let host = FakeHost::with_wallet("subwallet-js", vec![alice()]);
        let store = FlakyStore::default();
        store.fail_set(LAST_CONNECTED_WALLET);
        let mut connector = WalletConnector::new(host, store);

        let err = connector.connect("subwallet-js").await.unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(!connector.is_connected());
        assert_eq!(connector.selected_account(), None);
    }
}
