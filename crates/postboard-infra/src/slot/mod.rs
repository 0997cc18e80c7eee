//! Slot storage implementations - directory-backed and in-memory fallback.

mod memory;

#[cfg(feature = "file")]
mod file;

pub use memory::InMemorySlotStorage;

#[cfg(feature = "file")]
pub use file::FileSlotStorage;
