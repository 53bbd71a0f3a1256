//! Identifier assignment
//!
//! Ids are positive integers assigned as one past the current maximum in
//! the relevant collection, so an empty collection starts at 1.

use crate::comment::Comment;
use crate::post::Post;

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Next free post id for `posts`.
pub fn next_post_id(posts: &[Post]) -> u64 {
    next_id(posts.iter().map(|p| p.id))
}

/// Next free comment id within a single post's `comments`.
pub fn next_comment_id(comments: &[Comment]) -> u64 {
    next_id(comments.iter().map(|c| c.id))
}
