//! inkpost-core: domain logic for the inkpost blog API
//!
//! Post and comment records, itemized field validation, id assignment, the
//! ordered in-memory store, and the sort/filter/pagination helpers that
//! queries run over store snapshots.

pub mod comment;
pub mod error;
pub mod ids;
pub mod post;
pub mod query;
pub mod store;
pub mod validate;

pub use comment::{Comment, NewComment};
pub use error::{Error, Result};
pub use post::{NewPost, Post, PostPatch};
pub use query::{Direction, ListParams, ListQuery, SearchField, SearchParams, SortField};
pub use store::PostStore;
pub use validate::{FieldError, ValidationErrors};
