use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::errors::StoreError;

/// In-process store, used by tests and by callers that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.set("k", "1".to_string()).unwrap();
        store.set("k", "2".to_string()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("nothing").is_ok());
        assert!(store.is_empty());
    }
}
