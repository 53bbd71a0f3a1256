//! In-memory post collection
//!
//! `PostStore` owns every post for the lifetime of the process. Post ids come
//! from a monotonic counter so an id is never handed out twice, even after
//! the post that held it is deleted. Comment ids are scoped to their post and
//! rescanned on insert.

use crate::comment::{Comment, NewComment};
use crate::error::{Error, Result};
use crate::ids;
use crate::post::{NewPost, Post, PostPatch};

#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    next_post_id: u64,
}

impl PostStore {
    /// An empty store; the first created post gets id 1.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_post_id: 1,
        }
    }

    /// The two starter posts every fresh instance ships with.
    pub fn seeded() -> Self {
        Self::from_posts(vec![
            Post {
                id: 1,
                title: "First post".into(),
                content: "This is the first post.".into(),
                category: "general".into(),
                comments: Vec::new(),
            },
            Post {
                id: 2,
                title: "Second post".into(),
                content: "This is the second post.".into(),
                category: "general".into(),
                comments: Vec::new(),
            },
        ])
    }

    /// Build a store around existing posts, continuing id assignment after
    /// the highest id present.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let next_post_id = ids::next_post_id(&posts);
        Self {
            posts,
            next_post_id,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Snapshot of every post in insertion order.
    pub fn all(&self) -> Vec<Post> {
        self.posts.clone()
    }

    pub fn find(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Validate and insert a new post, returning the stored record.
    pub fn create(&mut self, payload: NewPost) -> Result<Post> {
        payload.validate()?;
        let post = Post {
            id: self.next_post_id,
            title: payload.title.unwrap_or_default(),
            content: payload.content.unwrap_or_default(),
            category: payload.category.unwrap_or_default(),
            comments: Vec::new(),
        };
        self.next_post_id += 1;
        self.posts.push(post.clone());
        Ok(post)
    }

    /// Apply a partial update to the post with `id`.
    pub fn update(&mut self, id: u64, patch: PostPatch) -> Result<Post> {
        let post = self.find_mut(id).ok_or(Error::PostNotFound { id })?;
        post.apply(patch);
        Ok(post.clone())
    }

    /// Remove and return the post with `id`. Its id is not reused.
    pub fn remove(&mut self, id: u64) -> Result<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PostNotFound { id })?;
        Ok(self.posts.remove(index))
    }

    /// Validate and attach a comment to the post with `post_id`.
    ///
    /// The post lookup happens before payload validation, so an unknown post
    /// reports not-found even when the payload is also bad.
    pub fn add_comment(&mut self, post_id: u64, payload: NewComment) -> Result<Comment> {
        let post = self
            .find_mut(post_id)
            .ok_or(Error::PostNotFound { id: post_id })?;
        payload.validate()?;
        let comment = Comment {
            id: ids::next_comment_id(&post.comments),
            text: payload.text_trimmed().to_owned(),
            author: payload.author_trimmed().to_owned(),
        };
        post.comments.push(comment.clone());
        Ok(comment)
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
