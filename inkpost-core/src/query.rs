//! Listing and search helpers
//!
//! Listing composes a stable field sort with 1-based pagination; search is a
//! case-insensitive substring scan over a single field. Raw query parameters
//! arrive as optional strings and are resolved here, with blank values
//! treated the same as absent ones.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::post::Post;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Content,
    Id,
}

impl SortField {
    /// Parse a `sort` parameter; values outside the allowed set are an error
    /// naming the offending field.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "id" => Ok(Self::Id),
            other => Err(Error::InvalidSortField {
                field: other.to_owned(),
            }),
        }
    }
}

/// Sort direction. Anything other than `desc` (case-insensitive) ascends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
    Category,
}

/// Raw listing parameters as they come off the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Resolved listing parameters with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: SortField,
    pub direction: Direction,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: SortField::Title,
            direction: Direction::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TryFrom<ListParams> for ListQuery {
    type Error = Error;

    fn try_from(params: ListParams) -> Result<Self> {
        let mut query = Self::default();
        if let Some(sort) = opt_param(&params.sort) {
            query.sort = SortField::parse(sort)?;
        }
        if let Some(direction) = opt_param(&params.direction) {
            query.direction = Direction::parse(direction);
        }
        if let Some(page) = opt_param(&params.page) {
            query.page = parse_index(page, "page")?;
        }
        if let Some(limit) = opt_param(&params.limit) {
            query.limit = parse_index(limit, "limit")?;
        }
        Ok(query)
    }
}

/// Raw search parameters; priority order is title, content, category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl SearchParams {
    /// The first non-blank parameter wins; all blank or absent is an error.
    pub fn resolve(&self) -> Result<(SearchField, &str)> {
        let candidates = [
            (SearchField::Title, &self.title),
            (SearchField::Content, &self.content),
            (SearchField::Category, &self.category),
        ];
        for (field, value) in candidates {
            if let Some(term) = opt_param(value) {
                return Ok((field, term));
            }
        }
        Err(Error::MissingSearchTerm)
    }
}

fn opt_param(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_index(value: &str, param: &'static str) -> Result<usize> {
    value.parse().map_err(|_| Error::InvalidPageParam { param })
}

/// Stable in-place sort by `field` in `direction`. Ties keep their prior
/// relative order in both directions.
pub fn sort_posts(posts: &mut [Post], field: SortField, direction: Direction) {
    posts.sort_by(|a, b| {
        let ord = match field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Id => a.id.cmp(&b.id),
        };
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

/// 1-based page slice `[(page-1)*limit, page*limit)`. Out-of-range pages
/// come back empty rather than erroring; page 0 behaves as page 1.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}

/// Posts whose `field` contains `term` as a case-insensitive substring.
pub fn search_posts(posts: &[Post], field: SearchField, term: &str) -> Vec<Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let haystack = match field {
                SearchField::Title => &post.title,
                SearchField::Content => &post.content,
                SearchField::Category => &post.category,
            };
            haystack.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
