//! # Shared Data Transfer Objects Library
//!
//! Types shared between the wallet core (`lib-core`) and the browser
//! front-end (`wallet-web`). Everything here is plain data with `serde`
//! derives, so it can be persisted in browser storage or handed to the
//! JavaScript bridges as JSON.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: wallet extension listing and account snapshots
//!   - **[`dto::contract`]**: contract call payloads and submission results
//! - **[`utils`]**: Display helpers
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::format_balance`]**: Planck amounts in whole tokens
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::Account;
//! use shared::utils::truncate_address;
//!
//! let alice = Account::new("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").with_name("Alice");
//! assert_eq!(alice.display_name(), "Alice");
//! assert_eq!(truncate_address(&alice.address), "5Grw...utQY");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
