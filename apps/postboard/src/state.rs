//! Storage wiring - picks the `PostStore` for this session.

use std::sync::Arc;

use postboard_core::ports::PostStore;
use postboard_infra::{InMemorySlotStorage, SlotPostStore};

#[cfg(feature = "file")]
use postboard_infra::FileSlotStorage;

use crate::config::{AppConfig, StorageBackend};

/// Build the post store for the configured backend.
///
/// An unusable data directory falls back to in-memory storage so the
/// session still starts.
pub fn build_store(config: &AppConfig) -> Arc<dyn PostStore> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; posts are lost on exit");
            memory_store(config)
        }
        #[cfg(feature = "file")]
        StorageBackend::File => match FileSlotStorage::open(&config.data_dir) {
            Ok(storage) => {
                tracing::info!(
                    dir = %config.data_dir.display(),
                    slot = %config.slot,
                    "Using file storage"
                );
                let store: Arc<dyn PostStore> =
                    Arc::new(SlotPostStore::with_key(storage, config.slot.clone()));
                store
            }
            Err(e) => {
                tracing::error!(
                    dir = %config.data_dir.display(),
                    error = %e,
                    "Failed to open data directory. Using in-memory fallback."
                );
                memory_store(config)
            }
        },
        #[cfg(not(feature = "file"))]
        StorageBackend::File => {
            tracing::warn!("Built without file feature - using in-memory storage");
            memory_store(config)
        }
    }
}

fn memory_store(config: &AppConfig) -> Arc<dyn PostStore> {
    Arc::new(SlotPostStore::with_key(
        InMemorySlotStorage::new(),
        config.slot.clone(),
    ))
}
