// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for the page.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Backing storage refused the request (disabled, quota, sandboxed frame).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Stored bytes were not valid UTF-8 text.
    #[error("invalid text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that reads/writes plain-text values through a `ConfigStore`.
///
/// Values are stored verbatim (no JSON quoting) so a key like `theme` holds
/// exactly `dark` or `light`, which keeps it readable by other scripts on the
/// page.
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load the text value for `key`. Returns `Ok(None)` if missing or empty.
    pub fn load_text(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    return Ok(None);
                }
                Ok(Some(String::from_utf8(bytes)?))
            }
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist a text value for `key`.
    pub fn save_text(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.store.save_raw(key, value.as_bytes())
    }
}

/// In-memory store used when durable storage is unavailable, and in tests.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

impl<T> ConfigStore for &T
where
    T: ConfigStore + ?Sized,
{
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        (**self).save_raw(key, data)
    }
}

impl<T> ConfigStore for Box<T>
where
    T: ConfigStore + ?Sized,
{
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        (**self).save_raw(key, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_as_none() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        assert!(svc.load_text("theme").unwrap().is_none());
    }

    #[test]
    fn text_is_stored_verbatim() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        svc.save_text("theme", "light").unwrap();
        assert_eq!(svc.store().load_raw("theme").unwrap(), b"light");
        assert_eq!(svc.load_text("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn empty_value_reads_as_missing() {
        let svc = ConfigService::new(MemoryConfigStore::new());
        svc.save_text("theme", "").unwrap();
        assert!(svc.load_text("theme").unwrap().is_none());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let store = MemoryConfigStore::new();
        store.save_raw("theme", &[0xff, 0xfe]).unwrap();
        let svc = ConfigService::new(store);
        assert!(matches!(svc.load_text("theme"), Err(ConfigError::Utf8(_))));
    }
}
