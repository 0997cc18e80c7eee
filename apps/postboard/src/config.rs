//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postboard_infra::DEFAULT_SLOT;

/// Where the post slot lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    pub slot: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup("POSTBOARD_STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StorageBackend::File,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                tracing::warn!(value = other, "Unknown POSTBOARD_STORAGE, using file storage");
                StorageBackend::File
            }
        };

        Self {
            storage,
            data_dir: lookup("POSTBOARD_DATA_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".postboard")),
            slot: lookup("POSTBOARD_SLOT")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
        }
    }
}
