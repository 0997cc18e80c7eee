//! Form validation for post title and content.

use crate::error::{Field, FieldError, ValidationErrors};

/// Trimmed, validated form input ready to become a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

/// Both fields must be non-empty after trimming. Each field is checked
/// independently so a form can show both errors at once.
pub fn validate(title: &str, content: &str) -> Result<PostDraft, ValidationErrors> {
    let title = title.trim();
    let content = content.trim();

    let errors = ValidationErrors {
        title: title
            .is_empty()
            .then_some(FieldError::Required(Field::Title)),
        content: content
            .is_empty()
            .then_some(FieldError::Required(Field::Content)),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PostDraft {
        title: title.to_string(),
        content: content.to_string(),
    })
}
