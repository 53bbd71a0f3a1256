//! Post endpoints
//!
//! Listing composes sort and pagination from query parameters; the list and
//! create routes share the per-client rate limit, search and the id routes
//! are unmetered.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{middleware, Json, Router};
use serde::Serialize;
use tracing::info;

use inkpost_core::query::{self, ListParams, ListQuery, SearchParams};
use inkpost_core::{NewPost, Post, PostPatch};

use crate::error::ApiError;
use crate::extract::{JsonBody, PostId, QueryParams};
use crate::rate_limit::{self, ClientRateLimiter};
use crate::state::AppState;

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/posts - list posts, sorted then paginated
async fn list_posts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let query = ListQuery::try_from(params)?;
    let mut posts = state.store().read().await.all();
    query::sort_posts(&mut posts, query.sort, query.direction);
    Ok(Json(query::paginate(posts, query.page, query.limit)))
}

/// POST /api/posts - create a post
async fn create_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.store().write().await.create(payload)?;
    info!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id} - merge the supplied fields into a post
async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonBody(patch): JsonBody<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store().write().await.update(id, patch)?;
    Ok(Json(post))
}

/// DELETE /api/posts/{id} - remove a post
async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let post = state.store().write().await.remove(id)?;
    info!(id = post.id, "post deleted");
    Ok(Json(DeleteResponse {
        message: format!("Post with id {} has been deleted successfully.", post.id),
    }))
}

/// GET /api/posts/search - substring search over one field
async fn search_posts(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let (field, term) = params.resolve()?;
    let posts = state.store().read().await.all();
    Ok(Json(query::search_posts(&posts, field, term)))
}

/// Post routes; `limiter` guards list and create only.
pub fn router(limiter: ClientRateLimiter) -> Router<AppState> {
    let limited = Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::enforce));

    Router::new()
        .merge(limited)
        .route("/api/posts/search", get(search_posts))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
}
