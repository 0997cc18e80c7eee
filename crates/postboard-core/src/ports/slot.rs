use crate::error::StoreError;

/// Named-slot key-value storage, modelled on browser local storage.
pub trait SlotStorage: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a slot holds a value.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

impl<T: SlotStorage + ?Sized> SlotStorage for std::sync::Arc<T> {
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
