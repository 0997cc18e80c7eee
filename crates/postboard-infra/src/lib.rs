//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `file` (default) - directory-backed slot storage
//! - `minimal` - in-memory only

pub mod slot;
pub mod store;

// Re-exports
pub use slot::InMemorySlotStorage;
pub use store::{DEFAULT_SLOT, SlotPostStore};

#[cfg(feature = "file")]
pub use slot::FileSlotStorage;
