use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("I/O error on key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// String key-value storage holding JSON-encoded blobs.
///
/// Backends make no atomicity promise across a get/set pair. Callers that
/// read-modify-write assume a single writer.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Keys end up as file names, so only `[A-Za-z0-9_-]` is accepted.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("activities").unwrap(), None);

        store.set("activities", "[]").unwrap();
        assert_eq!(store.get("activities").unwrap().as_deref(), Some("[]"));

        store.remove("activities").unwrap();
        assert_eq!(store.get("activities").unwrap(), None);
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let store = MemoryKeyValueStore::new();
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.set("../etc", "x"), Err(StoreError::InvalidKey(_))));
        assert!(validate_key("daily_footprint").is_ok());
        assert!(validate_key("joined-actions").is_ok());
    }

    #[test]
    fn test_store_usable_through_reference() {
        fn write_via<S: KeyValueStore>(store: S) {
            store.set("user", "{}").unwrap();
        }
        let store = MemoryKeyValueStore::new();
        write_via(&store);
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
    }
}
