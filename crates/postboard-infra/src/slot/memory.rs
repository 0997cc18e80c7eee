//! In-memory slot storage - used for tests and as fallback when the data
//! directory is unusable.

use std::collections::HashMap;
use std::sync::RwLock;

use postboard_core::error::StoreError;
use postboard_core::ports::SlotStorage;

/// In-memory slot storage using a HashMap behind an RwLock.
///
/// Note: Data is lost on process exit.
pub struct InMemorySlotStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned<E>(_: E) -> StoreError {
        StoreError::Backend("slot lock poisoned".to_string())
    }
}

impl Default for InMemorySlotStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStorage for InMemorySlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.read().map_err(Self::poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.write().map_err(Self::poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.write().map_err(Self::poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = InMemorySlotStorage::new();
        storage.set("key1", "value1").unwrap();
        assert_eq!(storage.get("key1").unwrap(), Some("value1".to_string()));
        assert!(storage.contains("key1"));
    }

    #[test]
    fn test_remove() {
        let storage = InMemorySlotStorage::new();
        storage.set("key1", "value1").unwrap();
        storage.remove("key1").unwrap();
        assert_eq!(storage.get("key1").unwrap(), None);
        storage.remove("key1").unwrap();
    }
}
