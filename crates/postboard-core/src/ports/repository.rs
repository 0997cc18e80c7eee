use crate::domain::Post;
use crate::error::StoreError;

/// Whole-collection persistence for posts.
///
/// The controller keeps the collection in memory and mirrors it here after
/// every mutation, so a store only ever loads or replaces the full list.
pub trait PostStore: Send + Sync {
    /// Read the persisted collection, in display order.
    fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the persisted collection.
    fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
