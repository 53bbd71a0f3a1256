//! Comment record and its write payload

use serde::{Deserialize, Serialize};

use crate::validate::{require, ValidationErrors};

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub author: String,
}

/// Creation payload for a comment. Unlike posts, comment fields are stored
/// trimmed, so the accessors below are what the store persists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewComment {
    pub text: Option<String>,
    pub author: Option<String>,
}

impl NewComment {
    /// Both fields must be present and non-blank.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "text", self.text.as_deref());
        require(&mut errors, "author", self.author.as_deref());
        errors.into_result()
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.as_deref().unwrap_or("").trim()
    }

    pub fn author_trimmed(&self) -> &str {
        self.author.as_deref().unwrap_or("").trim()
    }
}
