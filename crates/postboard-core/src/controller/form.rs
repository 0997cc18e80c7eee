use crate::domain::{Post, PostId};
use crate::error::ValidationErrors;

/// Whether the form creates a new post or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(PostId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn target(&self) -> Option<&PostId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// The post form as the presentation layer should show it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub errors: ValidationErrors,
}

impl PostForm {
    pub(crate) fn filled_from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            errors: ValidationErrors::default(),
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
