//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! wallet connector, the account selector and the contract call assembly.
//!
//! ## Error Categories
//!
//! The taxonomy is shallow and UI-facing:
//!
//! 1. **Precondition / input errors** - shown to the user verbatim, raised
//!    before any network call
//!    - [`Precondition`](AppError::Precondition) - no wallet, no account, empty form field
//!    - [`InvalidInput`](AppError::InvalidInput)
//!    - [`NotFound`](AppError::NotFound) - selecting an address the wallet does not expose
//!
//! 2. **External failures** - logged, shown as a generic message
//!    - [`Extension`](AppError::Extension) - wallet extension threw
//!    - [`Gateway`](AppError::Gateway) - balance query or transaction failed; transient
//!      and permanent failures are not told apart and nothing is retried
//!
//! 3. **Internal errors**
//!    - [`Storage`](AppError::Storage), [`Config`](AppError::Config),
//!      [`Encoding`](AppError::Encoding), [`Decoding`](AppError::Decoding)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_contract(addr: &str) -> Result<&str> {
//!     if addr.trim().is_empty() {
//!         return Err(AppError::Precondition("Please enter a contract address".to_string()));
//!     }
//!     Ok(addr)
//! }
//!
//! let err = require_contract("").unwrap_err();
//! assert!(err.is_precondition());
//! assert_eq!(err.user_message(), "Please enter a contract address");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String` for context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An operation was attempted before its inputs were in place
    /// (no wallet connected, no account selected, empty form field).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested account or wallet not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wallet extension failure (other than the user cancelling the prompt).
    #[error("Wallet extension error: {0}")]
    Extension(String),

    /// Chain gateway failure (balance query, sign-and-submit).
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Persisted key/value storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Deserialization error (corrupt persisted value, malformed bridge response).
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl AppError {
    /// Whether the error was raised before any external call was made.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::Precondition(_) | AppError::InvalidInput(_) | AppError::NotFound(_)
        )
    }

    /// Get a user-friendly error message.
    ///
    /// External and internal errors map to a generic message to avoid exposing
    /// implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Precondition(msg) | AppError::InvalidInput(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::Extension(_) => {
                "The wallet extension reported an error. Make sure it is unlocked and try again."
                    .to_string()
            }
            AppError::Gateway(_) => "The chain request failed".to_string(),
            AppError::Config(_)
            | AppError::Storage(_)
            | AppError::Encoding(_)
            | AppError::Decoding(_) => "An internal error occurred".to_string(),
        }
    }

    /// Log the error at a level matching its category.
    pub fn report(&self) {
        if self.is_precondition() {
            tracing::debug!("Rejected: {}", self);
        } else {
            tracing::error!("{}", self);
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            AppError::Decoding(format!("JSON error: {}", err))
        } else {
            AppError::Encoding(format!("JSON error: {}", err))
        }
    }
}

/// Convert environment lookup errors to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
