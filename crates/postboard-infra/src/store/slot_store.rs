//! Post collection persisted as one JSON array in a single named slot.

use postboard_core::domain::Post;
use postboard_core::error::StoreError;
use postboard_core::ports::{PostStore, SlotStorage};

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "blogPosts";

/// Serializes the whole collection into one slot of a [`SlotStorage`].
///
/// The payload is a bare JSON array of `{id, title, content, timestamp}`
/// objects with no version marker.
pub struct SlotPostStore<S> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> SlotPostStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SLOT)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: SlotStorage> PostStore for SlotPostStore<S> {
    fn load(&self) -> Result<Vec<Post>, StoreError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            tracing::debug!(slot = %self.key, "Slot is empty");
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.storage.set(&self.key, &raw)
    }
}
