//! Key-value persistence for motion preferences.
//!
//! [`BrowserStorage`] writes to localStorage so preferences survive reloads.
//! [`MemoryStorage`] keeps entries for the lifetime of the value; it backs
//! tests and pages where localStorage is unavailable.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::dom;
use crate::core::error::StorageError;

/// String key-value store used to persist preferences.
pub trait PreferenceStorage {
    /// Read an entry. Missing keys and unavailable storage both yield `None`.
    fn read(&self, key: &str) -> Option<String>;

    /// Write an entry.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// localStorage-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// In-memory store.
///
/// Clones share the same entries, so a caller can keep a handle after handing
/// one to [`crate::core::MotionSettings`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write, like a full or disabled localStorage.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Insert an entry directly, bypassing the read-only flag.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::WriteFailed(key.to_string()));
        }
        self.seed(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("k"), None);
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.write("k", "v").unwrap();
        assert_eq!(handle.read("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.set_read_only(true);
        assert_eq!(
            storage.write("k", "v"),
            Err(StorageError::WriteFailed("k".to_string()))
        );
        assert_eq!(storage.read("k"), None);
    }
}
