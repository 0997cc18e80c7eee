//! Directory-backed slot storage: one `<key>.json` file per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use postboard_core::error::StoreError;
use postboard_core::ports::SlotStorage;

const SLOT_EXTENSION: &str = "json";

/// Slot storage that keeps each slot in its own file under `dir`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// slot is either the old value or the new one, never a partial write.
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened slot directory");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::Backend(format!("invalid slot key: {key:?}")));
        }

        Ok(self.dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }
}

impl SlotStorage for FileSlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));

        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::trace!(slot = key, bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
