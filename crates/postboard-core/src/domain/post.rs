use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;
use crate::validation::PostDraft;

const ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque post identifier: `<unix-millis>-<base36 suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate a fresh id from the wall clock and a random suffix.
    pub fn generate() -> Self {
        let mut entropy = Uuid::new_v4().as_u128();
        let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
        for _ in 0..ID_SUFFIX_LEN {
            suffix.push(BASE36[(entropy % 36) as usize] as char);
            entropy /= 36;
        }

        Self(format!("{}-{}", Utc::now().timestamp_millis(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post entity - a short titled text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

impl Post {
    /// Create a new post from a validated draft.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            id: PostId::generate(),
            title: draft.title,
            content: draft.content,
            timestamp: timestamp::now(),
        }
    }

    /// Replace title and content, marking the timestamp as edited.
    pub fn revise(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.timestamp = timestamp::edited(timestamp::now());
    }

    pub fn is_edited(&self) -> bool {
        timestamp::is_edited(&self.timestamp)
    }
}
