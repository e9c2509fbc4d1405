//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the wallet core, the browser storage and
//! the JavaScript bridges (wallet extensions, chain gateway).
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet extension listing and account snapshots
//! - [`contract`] - Contract call payloads and submission results
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), except where a
//!   wallet extension dictates camelCase
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Balances and amounts**: `u128` values travel as decimal strings so the
//!   JavaScript side can hand them to `BigInt` without precision loss
//!
//! ## Example
//!
//! ```text
//! {
//!   "contract": "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
//!   "origin": "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty",
//!   "message": {
//!     "name": "create_pop_to_hydra_xcm",
//!     "args": { "amount": "1", "ref_time": 10000000000, "proof_size": 1000000 }
//!   }
//! }
//! ```

pub mod contract;
pub mod wallet;

pub use contract::*;
pub use wallet::*;
