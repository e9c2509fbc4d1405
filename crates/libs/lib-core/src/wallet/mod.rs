//! # Wallet Core
//!
//! Wallet extension session state and active-account selection.
//!
//! - [`host`] - the extension capability seam ([`ExtensionHost`])
//! - [`session`] - [`WalletSession`], created on connect and dropped on sign-out
//! - [`selector`] - [`AccountSelector`], the single active account and its
//!   reconciliation rule
//! - [`connector`] - [`WalletConnector`], which owns the session, the selector
//!   and the persisted keys
//!
//! All state lives in a [`WalletConnector`] value owned by the application
//! shell; there is no global context.

pub mod connector;
pub mod host;
pub mod selector;
pub mod session;

pub use connector::{ConnectOutcome, RestoreOutcome, WalletConnector};
pub use host::{EnabledWallet, ExtensionHost};
pub use selector::AccountSelector;
pub use session::WalletSession;
