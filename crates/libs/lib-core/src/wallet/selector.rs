//! # Account Selector
//!
//! Tracks the one account used for signing.
//!
//! ## Reconciliation
//!
//! Whenever the candidate list changes:
//! - the selected address is still present → keep it (refreshed from the new snapshot)
//! - otherwise → select the first candidate
//! - no candidates → clear the selection
//!
//! The selector itself is pure; persisting the result is the connector's job.

use shared::Account;
use tracing::debug;

use super::session::WalletSession;
use crate::error::{AppError, Result};

/// Candidate accounts of a session, empty without one.
pub fn candidates<Sig>(session: Option<&WalletSession<Sig>>) -> &[Account] {
    session.map(|s| s.accounts()).unwrap_or(&[])
}

/// The single active account, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSelector {
    selected: Option<Account>,
}

impl AccountSelector {
    /// Start from a previously persisted selection (not yet reconciled).
    pub fn new(persisted: Option<Account>) -> Self {
        Self {
            selected: persisted,
        }
    }

    pub fn selected(&self) -> Option<&Account> {
        self.selected.as_ref()
    }

    /// Select the candidate with `address`.
    ///
    /// An address that is not a candidate is rejected with
    /// [`AppError::NotFound`] and the selection is left unchanged.
    pub fn select<'c>(&mut self, candidates: &'c [Account], address: &str) -> Result<&'c Account> {
        let account = candidates
            .iter()
            .find(|a| a.address == address)
            .ok_or_else(|| {
                AppError::NotFound(format!("Account {} is not available in this wallet", address))
            })?;

        self.selected = Some(account.clone());
        Ok(account)
    }

    /// Apply the reconciliation rule. Returns `true` if the selection changed.
    pub fn reconcile(&mut self, candidates: &[Account]) -> bool {
        let next = self
            .selected
            .as_ref()
            .and_then(|current| candidates.iter().find(|a| a.address == current.address))
            .or_else(|| candidates.first())
            .cloned();

        if next == self.selected {
            return false;
        }

        debug!(
            "Account selection {:?} -> {:?}",
            self.selected.as_ref().map(|a| a.address.as_str()),
            next.as_ref().map(|a| a.address.as_str())
        );
        self.selected = next;
        true
    }

    /// Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts(addresses: &[&str]) -> Vec<Account> {
        addresses.iter().map(|a| Account::new(*a)).collect()
    }

    fn selected_address(selector: &AccountSelector) -> Option<&str> {
        selector.selected().map(|a| a.address.as_str())
    }

    #[test]
    fn test_reconcile_rule_over_lists() {
        let lists: Vec<Vec<Account>> = vec![
            accounts(&[]),
            accounts(&["A"]),
            accounts(&["B"]),
            accounts(&["A", "B"]),
            accounts(&["B", "A", "C"]),
            accounts(&["C", "D"]),
        ];
        let previous = [None, Some("A"), Some("B"), Some("Z")];

        for list in &lists {
            for prev in previous {
                let mut selector = AccountSelector::new(prev.map(Account::new));
                selector.reconcile(list);

                let expected = match prev {
                    Some(a) if list.iter().any(|acc| acc.address == a) => Some(a),
                    _ => list.first().map(|acc| acc.address.as_str()),
                };
                assert_eq!(
                    selected_address(&selector),
                    expected,
                    "previous {:?}, list {:?}",
                    prev,
                    list
                );
            }
        }
    }

    #[test]
    fn test_selected_account_removed_falls_back_to_first() {
        let mut selector = AccountSelector::default();
        let both = accounts(&["A", "B"]);
        selector.reconcile(&both);
        selector.select(&both, "B").unwrap();

        assert!(selector.reconcile(&accounts(&["A"])));
        assert_eq!(selected_address(&selector), Some("A"));
    }

    #[test]
    fn test_reconcile_refreshes_display_name() {
        let mut selector = AccountSelector::new(Some(Account::new("A").with_name("old")));

        assert!(selector.reconcile(&[Account::new("A").with_name("new")]));
        assert_eq!(selector.selected().unwrap().name.as_deref(), Some("new"));
        assert!(!selector.reconcile(&[Account::new("A").with_name("new")]));
    }

    #[test]
    fn test_select_unknown_address_is_rejected() {
        let list = accounts(&["A", "B"]);
        let mut selector = AccountSelector::default();
        selector.select(&list, "A").unwrap();

        let err = selector.select(&list, "Z").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(selected_address(&selector), Some("A"));
    }

    #[test]
    fn test_empty_candidates_clear_selection() {
        let mut selector = AccountSelector::new(Some(Account::new("A")));

        assert!(selector.reconcile(&[]));
        assert_eq!(selector.selected(), None);
        assert!(!selector.clear());
    }

    #[test]
    fn test_candidates_without_session() {
        assert!(candidates::<()>(None).is_empty());
    }
}
