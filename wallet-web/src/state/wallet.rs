//! Wallet state management
//!
//! The connector lives in a local signal. Anything that awaits the extension
//! or the chain clones what it needs out of the signal first and writes the
//! answer back afterwards, so no borrow is held across an await.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{
    fetch_balances, submit_fund, AppError, BalanceView, ChainGateway, Config, ConnectOutcome, ExtensionHost,
    FundForm, NetworkInfo, RestoreOutcome, Result, WalletConnector,
};
use shared::{Account, TxOutcome, WalletInfo};

use crate::services::{AccountSubscription, BrowserStore, InjectedHost, PapiGateway};

pub type Connector = WalletConnector<InjectedHost, BrowserStore>;

/// Handles to everything the views need. Passed down as a prop.
#[derive(Clone, Copy)]
pub struct AppState {
    pub connector: RwSignal<Connector, LocalStorage>,
    pub balances: RwSignal<BalanceView>,
    /// Last connect problem worth showing next to the wallet list
    pub notice: RwSignal<Option<String>>,
    config: StoredValue<Config>,
    network: StoredValue<NetworkInfo>,
    gateway: StoredValue<PapiGateway>,
    subscription: StoredValue<Option<AccountSubscription>, LocalStorage>,
    /// Id of the newest balance request; older responses are dropped
    balance_request: StoredValue<u64>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let network = config.default_network()?.clone();
        let connector = WalletConnector::new(InjectedHost::new(config.app_name.clone()), BrowserStore);

        log::info!("Using network {} ({})", network.name, network.endpoints.join(", "));

        Ok(Self {
            connector: RwSignal::new_local(connector),
            balances: RwSignal::new(BalanceView::default()),
            notice: RwSignal::new(None),
            gateway: StoredValue::new(PapiGateway::new(&network)),
            network: StoredValue::new(network),
            config: StoredValue::new(config),
            subscription: StoredValue::new_local(None),
            balance_request: StoredValue::new(0),
        })
    }

    // region:    --- Reads (tracked)

    pub fn is_connected(&self) -> bool {
        self.connector.with(|c| c.is_connected())
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.connector.with(|c| c.accounts().to_vec())
    }

    pub fn selected_account(&self) -> Option<Account> {
        self.connector.with(|c| c.selected_account().cloned())
    }

    /// Label of the connected wallet.
    pub fn wallet_label(&self) -> Option<String> {
        self.connector.with(|c| c.session().map(|s| s.label().to_string()))
    }

    pub fn wallet_icon(&self) -> Option<String> {
        self.connector
            .with(|c| c.session().and_then(|s| s.icon().map(str::to_string)))
    }

    pub fn available_wallets(&self) -> Vec<WalletInfo> {
        self.connector.with(|c| c.available_wallets())
    }

    pub fn network(&self) -> NetworkInfo {
        self.network.get_value()
    }

    pub fn app_name(&self) -> String {
        self.config.with_value(|c| c.app_name.clone())
    }

    /// Formatted free balance of `address`, `"-"` while unknown.
    pub fn balance_of(&self, address: &str) -> String {
        let network = self.network.get_value();
        self.balances.with(|b| b.display(address, &network))
    }

    // endregion: --- Reads (tracked)

    // region:    --- Session

    /// Reconnect the wallet used last, if any. Problems are logged only.
    pub fn restore_on_load(self) {
        let wallet_id = match self.connector.with_untracked(|c| c.begin_restore()) {
            Ok(id) => id,
            Err(outcome) => {
                log::debug!("Nothing restored on load: {:?}", outcome);
                return;
            }
        };
        let host = self.connector.with_untracked(|c| c.host().clone());

        spawn_local(async move {
            let answer = host.enable(&wallet_id).await;
            let outcome = self.connector.try_update(|c| c.finish_restore(&wallet_id, answer));
            if outcome == Some(RestoreOutcome::Restored) {
                self.session_started();
            }
        });
    }

    /// Run the authorisation flow for the wallet the user picked.
    pub async fn connect(self, wallet_id: String) -> Result<ConnectOutcome> {
        let host = self
            .connector
            .with_untracked(|c| c.begin_connect(&wallet_id).map(|()| c.host().clone()));
        let host = match host {
            Ok(host) => host,
            Err(outcome) => return Ok(outcome),
        };

        let answer = host.enable(&wallet_id).await;
        let outcome = self
            .connector
            .try_update(|c| c.finish_connect(&wallet_id, answer))
            .ok_or_else(disposed)??;

        if outcome == ConnectOutcome::Connected {
            self.session_started();
        }
        Ok(outcome)
    }

    /// Forget the wallet and the selected account.
    pub fn sign_out(self) -> Result<()> {
        self.session_ended();
        self.connector.try_update(|c| c.sign_out()).ok_or_else(disposed)?
    }

    /// Drop the session if its extension is no longer injected.
    pub fn check_extension(self) {
        let gone = self.connector.with_untracked(|c| {
            c.session()
                .is_some_and(|s| !c.host().is_installed(s.wallet_id()))
        });
        if !gone {
            return;
        }

        self.session_ended();
        if let Some(Err(e)) = self.connector.try_update(|c| c.extension_disconnected()) {
            e.report();
        }
    }

    fn session_started(self) {
        self.notice.set(None);
        self.subscribe_accounts();
        self.refresh_balances();
    }

    fn session_ended(self) {
        self.subscription.update_value(|s| *s = None);
        self.next_balance_request();
        self.balances.set(BalanceView::default());
    }

    fn next_balance_request(self) -> u64 {
        self.balance_request.update_value(|id| *id += 1);
        self.balance_request.get_value()
    }

    /// Follow the extension's account list; replaces any previous subscription.
    fn subscribe_accounts(self) {
        let signer = self.connector.with_untracked(|c| c.signer().cloned());
        let subscription = signer.map(|signer| {
            AccountSubscription::start(&signer, move |accounts| {
                if let Some(Err(e)) = self.connector.try_update(|c| c.accounts_changed(accounts)) {
                    e.report();
                }
            })
        });
        self.subscription.update_value(|s| *s = subscription);
    }

    // endregion: --- Session

    // region:    --- Accounts

    pub fn select_account(self, address: &str) -> Result<()> {
        self.connector
            .try_update(|c| c.select_account(address).map(|_| ()))
            .ok_or_else(disposed)?
    }

    /// Re-query free balances of the current candidates.
    pub fn refresh_balances(self) {
        let gateway = self.gateway.get_value();
        if !gateway.is_ready() {
            log::debug!("Skipping balance refresh: chain API not ready");
            return;
        }
        let accounts = self.connector.with_untracked(|c| c.accounts().to_vec());
        let request = self.next_balance_request();

        spawn_local(async move {
            match fetch_balances(&gateway, &accounts).await {
                Ok(view) => {
                    let current = self.balance_request.get_value() == request
                        && self.connector.with_untracked(|c| view.is_for(c.accounts()));
                    if current {
                        self.balances.set(view);
                    } else {
                        log::debug!("Dropping stale balance response #{}", request);
                    }
                }
                Err(e) => e.report(),
            }
        });
    }

    // endregion: --- Accounts

    /// Validate and submit the fund call for the selected account.
    pub async fn fund(self, form: FundForm) -> Result<TxOutcome> {
        let (signer, origin) = self
            .connector
            .with_untracked(|c| (c.signer().cloned(), c.selected_account().cloned()));
        let settings = self.config.with_value(|c| c.fund);
        let gateway = self.gateway.get_value();

        submit_fund(&gateway, signer.as_ref(), origin.as_ref(), &form, &settings).await
    }
}

fn disposed() -> AppError {
    AppError::Storage("wallet state was disposed".to_string())
}
