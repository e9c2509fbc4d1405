//! In-memory fakes for the extension and gateway seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use shared::{Account, ContractCall, TxOutcome, WalletInfo};

use crate::error::{AppError, Result};
use crate::gateway::ChainGateway;
use crate::model::store::{KeyValueStore, MemoryStore};
use crate::wallet::{EnabledWallet, ExtensionHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeSigner(pub String);

enum NextAnswer {
    Cancel,
    Fail(String),
}

#[derive(Default)]
struct HostState {
    wallets: Vec<(String, Vec<Account>)>,
    next: Option<NextAnswer>,
    enable_calls: usize,
}

/// Extension host whose clones share state, so a test can keep a handle
/// after moving one into a connector.
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<HostState>>,
}

impl FakeHost {
    pub fn with_wallet(id: &str, accounts: Vec<Account>) -> Self {
        let host = Self::default();
        host.add_wallet(id, accounts);
        host
    }

    pub fn add_wallet(&self, id: &str, accounts: Vec<Account>) {
        self.state.borrow_mut().wallets.push((id.to_string(), accounts));
    }

    pub fn cancel_next(&self) {
        self.state.borrow_mut().next = Some(NextAnswer::Cancel);
    }

    pub fn fail_next(&self, reason: &str) {
        self.state.borrow_mut().next = Some(NextAnswer::Fail(reason.to_string()));
    }

    pub fn enable_calls(&self) -> usize {
        self.state.borrow().enable_calls
    }
}

#[async_trait(?Send)]
impl ExtensionHost for FakeHost {
    type Signer = FakeSigner;

    fn available_wallets(&self) -> Vec<WalletInfo> {
        let ids: Vec<String> = self.state.borrow().wallets.iter().map(|(id, _)| id.clone()).collect();
        WalletInfo::merge_installed(&ids)
    }

    async fn enable(&self, wallet_id: &str) -> Result<Option<EnabledWallet<FakeSigner>>> {
        let wallet = self
            .available_wallets()
            .into_iter()
            .find(|w| w.id == wallet_id && w.installed)
            .ok_or_else(|| AppError::Extension(format!("{} is not injected", wallet_id)))?;

        let mut state = self.state.borrow_mut();
        state.enable_calls += 1;

        match state.next.take() {
            Some(NextAnswer::Cancel) => return Ok(None),
            Some(NextAnswer::Fail(reason)) => return Err(AppError::Extension(reason)),
            None => {}
        }

        let accounts = state
            .wallets
            .iter()
            .find(|(id, _)| id == wallet_id)
            .map(|(_, accounts)| accounts.clone())
            .unwrap_or_default();

        Ok(Some(EnabledWallet {
            wallet,
            accounts,
            signer: FakeSigner(wallet_id.to_string()),
        }))
    }
}

/// Gateway that records submissions instead of talking to a chain.
pub struct FakeGateway {
    ready: Cell<bool>,
    failure: Option<String>,
    balances: RefCell<HashMap<String, u128>>,
    submitted: RefCell<Vec<(ContractCall, FakeSigner)>>,
    submit_attempts: Cell<usize>,
    balance_queries: Cell<usize>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            ready: Cell::new(true),
            failure: None,
            balances: RefCell::new(HashMap::new()),
            submitted: RefCell::new(Vec::new()),
            submit_attempts: Cell::new(0),
            balance_queries: Cell::new(0),
        }
    }
}

impl FakeGateway {
    /// Every request fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    pub fn set_balance(&self, address: &str, free: u128) {
        self.balances.borrow_mut().insert(address.to_string(), free);
    }

    pub fn submitted(&self) -> Vec<(ContractCall, FakeSigner)> {
        self.submitted.borrow().clone()
    }

    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts.get()
    }

    pub fn balance_queries(&self) -> usize {
        self.balance_queries.get()
    }
}

#[async_trait(?Send)]
impl ChainGateway for FakeGateway {
    type Signer = FakeSigner;

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    async fn free_balances(&self, addresses: &[String]) -> Result<HashMap<String, u128>> {
        self.balance_queries.set(self.balance_queries.get() + 1);
        if let Some(reason) = &self.failure {
            return Err(AppError::Gateway(reason.clone()));
        }

        let balances = self.balances.borrow();
        Ok(addresses
            .iter()
            .filter_map(|a| balances.get(a).map(|free| (a.clone(), *free)))
            .collect())
    }

    async fn sign_and_submit(&self, call: &ContractCall, signer: &FakeSigner) -> Result<TxOutcome> {
        let attempt = self.submit_attempts.get() + 1;
        self.submit_attempts.set(attempt);
        if let Some(reason) = &self.failure {
            return Err(AppError::Gateway(reason.clone()));
        }

        self.submitted.borrow_mut().push((call.clone(), signer.clone()));
        Ok(TxOutcome {
            tx_hash: format!("0x{:02x}", attempt),
            block_hash: None,
        })
    }
}

#[derive(Default)]
struct FlakyState {
    entries: MemoryStore,
    fail_set: Option<String>,
    fail_remove: Option<String>,
}

/// Store whose writes to chosen keys fail, as a full or blocked
/// `localStorage` would. Clones share state.
#[derive(Clone, Default)]
pub struct FlakyStore {
    state: Rc<RefCell<FlakyState>>,
}

impl FlakyStore {
    pub fn fail_set(&self, key: &str) {
        self.state.borrow_mut().fail_set = Some(key.to_string());
    }

    pub fn fail_remove(&self, key: &str) {
        self.state.borrow_mut().fail_remove = Some(key.to_string());
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.state.borrow().entries.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_set.as_deref() == Some(key) {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        state.entries.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_remove.as_deref() == Some(key) {
            return Err(AppError::Storage("storage is read-only".to_string()));
        }
        state.entries.remove(key)
    }
}
