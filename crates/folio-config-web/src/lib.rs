// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `localStorage`-backed `ConfigStore` for the page (durable across loads).

use folio_app_core::config::{ConfigError, ConfigStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Store values as plain strings in the window's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the current window's `localStorage`.
    ///
    /// Fails when there is no window (workers), or when storage is disabled
    /// or blocked (privacy modes, sandboxed iframes).
    pub fn new() -> Result<Self, ConfigError> {
        let window =
            web_sys::window().ok_or_else(|| ConfigError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ConfigError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }

    /// Wrap an existing storage object (e.g. `sessionStorage` in tests).
    pub fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }
}

fn js_error(err: JsValue) -> ConfigError {
    ConfigError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ConfigStore for LocalStorageStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self.storage.get_item(key).map_err(js_error)? {
            Some(value) => Ok(value.into_bytes()),
            None => Err(ConfigError::NotFound),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let value = std::str::from_utf8(data)
            .map_err(|e| ConfigError::Other(format!("non-text value for {key}: {e}")))?;
        self.storage.set_item(key, value).map_err(js_error)
    }
}
