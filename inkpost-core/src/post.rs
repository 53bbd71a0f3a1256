//! Post record and its write payloads

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::validate::{require, ValidationErrors};

/// A stored blog post.
///
/// Field values are kept exactly as submitted; validation only checks that
/// the trimmed value is non-empty, it never rewrites what the client sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Merge `patch` into this post. Absent fields keep their current value;
    /// `id` and `comments` are never touched by an update.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Creation payload. Every field is optional at the deserialization layer so
/// that missing keys surface as validation items instead of decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl NewPost {
    /// All three fields must be present and non-blank.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require(&mut errors, "title", self.title.as_deref());
        require(&mut errors, "content", self.content.as_deref());
        require(&mut errors, "category", self.category.as_deref());
        errors.into_result()
    }
}

/// Update payload. Only the supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: 7,
            title: "Hello".into(),
            content: "World".into(),
            category: "general".into(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let payload = NewPost {
            title: Some("A title".into()),
            content: Some("Some content".into()),
            category: Some("tech".into()),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let payload = NewPost::default();
        let errors = payload.validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["title is empty", "content is empty", "category is empty"]
        );
    }

    #[test]
    fn blank_title_is_reported() {
        let payload = NewPost {
            title: Some("   ".into()),
            content: Some("body".into()),
            category: Some("tech".into()),
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.messages(), vec!["title is empty"]);
    }

    #[test]
    fn payload_with_missing_keys_deserializes() {
        let payload: NewPost = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Only a title"));
        assert!(payload.content.is_none());
        assert!(payload.category.is_none());
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut post = sample_post();
        post.apply(PostPatch {
            title: Some("Updated".into()),
            content: None,
            category: None,
        });
        assert_eq!(post.title, "Updated");
        assert_eq!(post.content, "World");
        assert_eq!(post.category, "general");
        assert_eq!(post.id, 7);
    }

    #[test]
    fn apply_with_empty_patch_changes_nothing() {
        let mut post = sample_post();
        post.apply(PostPatch::default());
        assert_eq!(post, sample_post());
    }

    #[test]
    fn stored_post_without_comments_key_deserializes() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "category": "g"}"#,
        )
        .unwrap();
        assert!(post.comments.is_empty());
    }
}
