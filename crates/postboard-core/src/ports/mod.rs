//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod slot;

pub use repository::PostStore;
pub use slot::SlotStorage;
