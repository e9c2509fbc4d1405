//! `localStorage` backed [`KeyValueStore`]

use lib_core::{AppError, KeyValueStore, Result};
use web_sys::Storage;

use super::js_error_message;

/// Store over `window.localStorage`. Cheap to create; holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(js_error_message(&e)))?
            .ok_or_else(|| AppError::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(js_error_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(js_error_message(&e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(js_error_message(&e)))
    }
}
