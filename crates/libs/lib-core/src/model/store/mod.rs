//! # Key/Value Store
//!
//! The persisted state of the dApp is two plain keys:
//!
//! | Key                       | Value                                      |
//! |---------------------------|--------------------------------------------|
//! | [`LAST_CONNECTED_WALLET`] | wallet id string, e.g. `subwallet-js`      |
//! | [`CONNECTED_ACCOUNT`]     | JSON `{"address": "...", "name": "..."}`   |
//!
//! There is no schema version. A value that fails to decode is treated as
//! absent by the callers.

// region: --- Modules
mod memory;
// endregion: --- Modules

// region: --- Re-exports
pub use memory::MemoryStore;
// endregion: --- Re-exports

// region: --- Types and Functions
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Id of the wallet extension used last; drives restore-on-load.
pub const LAST_CONNECTED_WALLET: &str = "LAST_CONNECTED_WALLET";

/// Active account selection.
pub const CONNECTED_ACCOUNT: &str = "CONNECTED_ACCOUNT";

/// String key/value storage that survives a reload.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Read and decode a JSON value.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value.
pub fn save_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
// endregion: --- Types and Functions
