//! The post controller: owns the in-memory collection, the form mode and
//! the pending delete, and mirrors every mutation to a [`PostStore`].

mod form;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use form::{FormMode, PostForm};

use crate::domain::{Post, PostId};
use crate::error::{StoreError, ValidationErrors};
use crate::ports::PostStore;
use crate::validation::{self, PostDraft};

/// What a successful submit did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(PostId),
    Updated(PostId),
    /// The edit target was deleted before the submit; nothing changed.
    TargetMissing(PostId),
}

/// Single-session controller for the post board.
///
/// Every operation runs to completion synchronously. Storage writes are
/// best-effort: a failed save is logged and kept in
/// [`last_persist_error`](Self::last_persist_error), the in-memory change stays.
pub struct PostController {
    store: Arc<dyn PostStore>,
    posts: Vec<Post>,
    mode: FormMode,
    pending_delete: Option<PostId>,
    form: PostForm,
    last_persist_error: Option<StoreError>,
}

impl PostController {
    /// Create a controller with an empty collection. Call [`load`](Self::load)
    /// to read the persisted posts.
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            posts: Vec::new(),
            mode: FormMode::Create,
            pending_delete: None,
            form: PostForm::default(),
            last_persist_error: None,
        }
    }

    /// Create a controller and load the persisted collection.
    pub fn open(store: Arc<dyn PostStore>) -> Self {
        let mut controller = Self::new(store);
        controller.load();
        controller
    }

    /// Read the persisted collection. Missing or unreadable data yields an
    /// empty board.
    pub fn load(&mut self) {
        self.posts = match self.store.load() {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "Loaded posts");
                posts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored posts, starting empty");
                Vec::new()
            }
        };
    }

    pub fn validate(title: &str, content: &str) -> Result<PostDraft, ValidationErrors> {
        validation::validate(title, content)
    }

    /// Create or update a post from form input.
    ///
    /// On validation failure the collection is untouched and the errors are
    /// also recorded on the form alongside the rejected input.
    pub fn submit(&mut self, title: &str, content: &str) -> Result<SubmitOutcome, ValidationErrors> {
        let draft = match Self::validate(title, content) {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(%errors, "Rejected post form");
                self.form = PostForm {
                    title: title.to_string(),
                    content: content.to_string(),
                    errors: errors.clone(),
                };
                return Err(errors);
            }
        };

        let outcome = match self.mode.target().cloned() {
            Some(id) => match self.position(&id) {
                Some(index) => {
                    self.posts[index].revise(draft);
                    tracing::info!(post_id = %id, "Updated post");
                    SubmitOutcome::Updated(id)
                }
                None => {
                    tracing::debug!(post_id = %id, "Edit target no longer exists");
                    SubmitOutcome::TargetMissing(id)
                }
            },
            None => {
                let post = Post::new(draft);
                let id = post.id.clone();
                self.posts.insert(0, post);
                tracing::info!(post_id = %id, "Created post");
                SubmitOutcome::Created(id)
            }
        };

        self.persist();
        self.reset_form();

        Ok(outcome)
    }

    /// Mark a post as awaiting delete confirmation.
    pub fn request_delete(&mut self, id: &PostId) {
        tracing::debug!(post_id = %id, "Delete requested");
        self.pending_delete = Some(id.clone());
    }

    /// Delete the pending post, if any. The pending state is cleared either way.
    pub fn confirm_delete(&mut self) -> Option<Post> {
        let id = self.pending_delete.take()?;

        let Some(index) = self.position(&id) else {
            tracing::debug!(post_id = %id, "Delete target no longer exists");
            return None;
        };

        let removed = self.posts.remove(index);
        tracing::info!(post_id = %id, "Deleted post");
        self.persist();

        if self.mode.target() == Some(&id) {
            self.reset_form();
        }

        Some(removed)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Load a post into the form and switch to edit mode.
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn begin_edit(&mut self, id: &PostId) -> bool {
        let Some(post) = self.find(id) else {
            tracing::debug!(post_id = %id, "Edit target not found");
            return false;
        };

        let form = PostForm::filled_from(post);
        self.form = form;
        self.mode = FormMode::Edit(id.clone());
        true
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn pending_delete(&self) -> Option<&PostId> {
        self.pending_delete.as_ref()
    }

    pub fn last_persist_error(&self) -> Option<&StoreError> {
        self.last_persist_error.as_ref()
    }

    fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|p| &p.id == id)
    }

    fn persist(&mut self) {
        match self.store.save(&self.posts) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                tracing::warn!(error = %e, count = self.posts.len(), "Failed to persist posts");
                self.last_persist_error = Some(e);
            }
        }
    }

    fn reset_form(&mut self) {
        self.mode = FormMode::Create;
        self.form.clear();
    }
}
