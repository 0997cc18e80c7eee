//! View models - what a front end needs to draw the board.

use postboard_core::{Field, FormMode, Post, PostController};

pub const EMPTY_MESSAGE: &str = "No posts yet. Create your first post!";

/// A single rendered post summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: String,
    pub edited: bool,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            timestamp: post.timestamp.clone(),
            edited: post.is_edited(),
        }
    }
}

/// The post form, labelled for its current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub show_cancel: bool,
    pub title: String,
    pub content: String,
    pub title_error: Option<String>,
    pub content_error: Option<String>,
}

/// Confirmation prompt shown while a delete is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub id: String,
    /// Title of the pending post, if it still exists.
    pub title: Option<String>,
}

impl DeletePrompt {
    pub fn message(&self) -> String {
        match &self.title {
            Some(title) => format!("Delete \"{title}\"? This cannot be undone."),
            None => "Delete this post? This cannot be undone.".to_string(),
        }
    }
}

/// Everything needed to draw the board after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub form: FormView,
    pub cards: Vec<PostCard>,
    pub is_empty: bool,
    pub delete_prompt: Option<DeletePrompt>,
    pub notice: Option<String>,
}

impl BoardView {
    pub fn from_controller(controller: &PostController) -> Self {
        let form = controller.form();
        let editing = controller.mode().is_edit();

        let (heading, submit_label) = match controller.mode() {
            FormMode::Create => ("Create New Post", "Add Post"),
            FormMode::Edit(_) => ("Edit Post", "Update Post"),
        };

        let cards: Vec<PostCard> = controller.posts().iter().map(PostCard::from).collect();

        let delete_prompt = controller.pending_delete().map(|id| DeletePrompt {
            id: id.to_string(),
            title: controller.find(id).map(|p| p.title.clone()),
        });

        Self {
            form: FormView {
                heading,
                submit_label,
                show_cancel: editing,
                title: form.title.clone(),
                content: form.content.clone(),
                title_error: form.errors.get(Field::Title).map(ToString::to_string),
                content_error: form.errors.get(Field::Content).map(ToString::to_string),
            },
            is_empty: cards.is_empty(),
            cards,
            delete_prompt,
            notice: controller
                .last_persist_error()
                .map(|e| format!("Changes were not saved: {e}")),
        }
    }
}
