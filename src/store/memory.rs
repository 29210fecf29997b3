use std::collections::HashMap;

use crate::store::{KeyValueStore, StoreError};

/// In-memory backend; stands in for browser local storage in tests and
/// ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("k").expect("get"), None);
        store.set("k", "v1").expect("set");
        store.set("k", "v2").expect("overwrite");
        assert_eq!(store.get("k").expect("get"), Some("v2".to_string()));
        store.delete("k").expect("delete");
        assert_eq!(store.get("k").expect("get"), None);
    }
}
