//! Wallet extension and account DTOs.

use serde::{Deserialize, Serialize};

use crate::utils::monogram_icon;

/// One address managed by a connected wallet extension.
///
/// Snapshots are immutable: when an extension reports its accounts the whole
/// list is replaced, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Chain-format (SS58) address
    pub address: String,
    /// Display name set in the extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show in menus, falling back to the shortened address.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => crate::utils::truncate_address(&self.address),
        }
    }
}

/// An entry of the extension-selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Key under `window.injectedWeb3` (e.g. `subwallet-js`)
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Download page shown when the extension is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub installed: bool,
}

/// Extensions recommended in the selection list, in display order:
/// `(id, label, download page, badge color)`.
pub const KNOWN_WALLETS: &[(&str, &str, &str, &str)] = &[
    ("subwallet-js", "SubWallet", "https://subwallet.app", "#004BFF"),
    ("talisman", "Talisman", "https://talisman.xyz", "#FD4848"),
    ("polkadot-js", "Polkadot{.js}", "https://polkadot.js.org/extension", "#FF8C00"),
];

/// Badge color of injected extensions we do not know.
const UNKNOWN_WALLET_COLOR: &str = "#666666";

impl WalletInfo {
    /// Build the selection list: known wallets first (flagged when installed),
    /// then any other injected extension in the order it was reported.
    pub fn merge_installed(installed_ids: &[String]) -> Vec<WalletInfo> {
        let mut wallets: Vec<WalletInfo> = KNOWN_WALLETS
            .iter()
            .map(|(id, label, url, color)| WalletInfo {
                id: id.to_string(),
                label: label.to_string(),
                icon: Some(monogram_icon(label, color)),
                url: Some(url.to_string()),
                installed: installed_ids.iter().any(|installed| installed == id),
            })
            .collect();

        for id in installed_ids {
            if !wallets.iter().any(|w| &w.id == id) {
                wallets.push(WalletInfo {
                    id: id.clone(),
                    label: id.clone(),
                    icon: Some(monogram_icon(id, UNKNOWN_WALLET_COLOR)),
                    url: None,
                    installed: true,
                });
            }
        }

        wallets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_display_name() {
        let account = Account::new("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
        assert_eq!(account.display_name(), "5Grw...utQY");
        assert_eq!(account.clone().with_name("Alice").display_name(), "Alice");
        assert_eq!(account.with_name("  ").display_name(), "5Grw...utQY");
    }

    #[test]
    fn test_account_json_omits_missing_name() {
        let json = serde_json::to_string(&Account::new("5Grw")).unwrap();
        assert_eq!(json, r#"{"address":"5Grw"}"#);

        let parsed: Account = serde_json::from_str(r#"{"address":"5Grw","name":"Alice"}"#).unwrap();
        assert_eq!(parsed, Account::new("5Grw").with_name("Alice"));
    }

    #[test]
    fn test_merge_installed() {
        let wallets = WalletInfo::merge_installed(&["talisman".to_string(), "enkrypt".to_string()]);
        let ids: Vec<&str> = wallets.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["subwallet-js", "talisman", "polkadot-js", "enkrypt"]);

        let installed: Vec<bool> = wallets.iter().map(|w| w.installed).collect();
        assert_eq!(installed, vec![false, true, false, true]);

        assert!(wallets
            .iter()
            .all(|w| w.icon.as_deref().is_some_and(|icon| icon.starts_with("data:image/svg+xml,"))));
        assert!(wallets[3].icon.as_deref().is_some_and(|icon| icon.contains(">E</text>")));
    }
}
