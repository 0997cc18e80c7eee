//! `PostStore` implementations.

mod slot_store;

pub use slot_store::{DEFAULT_SLOT, SlotPostStore};
