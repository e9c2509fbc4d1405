//! Polkadot wallet extensions via wasm-bindgen
//!
//! Extensions register themselves under `window.injectedWeb3[id]` and expose
//! `enable(appName)`, which resolves to an object carrying `accounts` and a
//! `signer`. The signer never leaves JS; Rust only holds the handle.

use async_trait::async_trait;
use lib_core::{AppError, EnabledWallet, ExtensionHost, Result};
use serde::Deserialize;
use shared::{Account, WalletInfo};
use wasm_bindgen::prelude::*;

use super::js_error_message;

// ============================================================================
// EXTENSION DISCOVERY AND AUTHORISATION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function toAccounts(list) {
    return (list || []).map(a => ({ address: a.address, name: a.name ?? null }));
}

export function injectedWalletIds() {
    const injected = window.injectedWeb3;
    return injected ? Object.keys(injected) : [];
}

export async function enableWallet(id, appName) {
    const entry = window.injectedWeb3 && window.injectedWeb3[id];
    if (!entry || typeof entry.enable !== 'function') {
        throw new Error(id + ' is not installed');
    }

    let injected;
    try {
        injected = await entry.enable(appName);
    } catch (error) {
        const message = (error && error.message) || String(error);
        // Extensions reject with a plain error when the user closes the prompt
        if (/reject|cancel|denied|not allowed/i.test(message)) {
            return null;
        }
        throw error;
    }
    if (!injected) {
        return null;
    }

    const accounts = await injected.accounts.get();
    return { injected: injected, signer: injected.signer, accounts: toAccounts(accounts) };
}

export function subscribeAccounts(injected, callback) {
    const unsubscribe = injected.accounts.subscribe(list => callback(toAccounts(list)));
    return typeof unsubscribe === 'function' ? unsubscribe : () => {};
}
")]
extern "C" {
    /// Ids of every extension currently injected
    #[wasm_bindgen(js_name = injectedWalletIds)]
    fn injected_wallet_ids() -> JsValue;

    /// Ask extension `id` for access; resolves to `null` when the user declines
    #[wasm_bindgen(catch, js_name = enableWallet)]
    async fn enable_wallet(id: &str, app_name: &str) -> std::result::Result<JsValue, JsValue>;

    /// Register `callback` for account list updates; returns the unsubscribe function
    #[wasm_bindgen(js_name = subscribeAccounts)]
    fn subscribe_accounts(injected: &JsValue, callback: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;
}

/// Signing handle of an enabled extension.
#[derive(Clone, Debug)]
pub struct JsSigner {
    injected: JsValue,
    signer: JsValue,
}

impl JsSigner {
    /// The extension's `signer` object, passed through to the chain SDK.
    pub fn as_js(&self) -> &JsValue {
        &self.signer
    }
}

#[derive(Deserialize)]
struct EnabledAccounts {
    accounts: Vec<Account>,
}

/// [`ExtensionHost`] over `window.injectedWeb3`.
#[derive(Clone, Debug)]
pub struct InjectedHost {
    app_name: String,
}

impl InjectedHost {
    /// `app_name` is what extensions show in their authorisation prompt.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn installed_ids(&self) -> Vec<String> {
        serde_wasm_bindgen::from_value(injected_wallet_ids()).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl ExtensionHost for InjectedHost {
    type Signer = JsSigner;

    fn available_wallets(&self) -> Vec<WalletInfo> {
        WalletInfo::merge_installed(&self.installed_ids())
    }

    async fn enable(&self, wallet_id: &str) -> Result<Option<EnabledWallet<JsSigner>>> {
        let answer = enable_wallet(wallet_id, &self.app_name)
            .await
            .map_err(|e| AppError::Extension(format!("{}: {}", wallet_id, js_error_message(&e))))?;

        if answer.is_null() || answer.is_undefined() {
            return Ok(None);
        }

        let EnabledAccounts { accounts } = serde_wasm_bindgen::from_value(answer.clone())
            .map_err(|e| AppError::Decoding(format!("accounts from {}: {}", wallet_id, e)))?;
        let field = |name: &str| js_sys::Reflect::get(&answer, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);

        let wallet = self
            .available_wallets()
            .into_iter()
            .find(|w| w.id == wallet_id)
            .ok_or_else(|| AppError::Extension(format!("{} is no longer injected", wallet_id)))?;

        Ok(Some(EnabledWallet {
            wallet,
            accounts,
            signer: JsSigner {
                injected: field("injected"),
                signer: field("signer"),
            },
        }))
    }
}

/// Live account subscription. Dropping it unsubscribes.
pub struct AccountSubscription {
    unsubscribe: js_sys::Function,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl AccountSubscription {
    /// Forward account list updates of the extension behind `signer` to `on_accounts`.
    pub fn start(signer: &JsSigner, mut on_accounts: impl FnMut(Vec<Account>) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<Account>>(value) {
                Ok(accounts) => on_accounts(accounts),
                Err(e) => log::warn!("Ignoring malformed account update: {}", e),
            }
        });
        let unsubscribe = subscribe_accounts(&signer.injected, &callback);

        Self {
            unsubscribe,
            _callback: callback,
        }
    }
}

impl Drop for AccountSubscription {
    fn drop(&mut self) {
        if let Err(e) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("Account unsubscribe failed: {}", js_error_message(&e));
        }
    }
}
