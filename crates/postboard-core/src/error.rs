//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("Title"),
            Field::Content => f.write_str("Content"),
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
}

/// Validation failures, reported per field. Both fields can fail at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<FieldError>,
    pub content: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Title => self.title.as_ref(),
            Field::Content => self.content.as_ref(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.title
            .iter()
            .chain(self.content.iter())
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Persistence errors raised by storage ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
