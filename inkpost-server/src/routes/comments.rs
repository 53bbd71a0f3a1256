//! Comment endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use inkpost_core::{Comment, NewComment};

use crate::error::ApiError;
use crate::extract::{JsonBody, PostId};
use crate::state::AppState;

/// POST /api/posts/{id}/comments - attach a comment to a post
async fn add_comment(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonBody(payload): JsonBody<NewComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state.store().write().await.add_comment(id, payload)?;
    info!(post_id = id, comment_id = comment.id, "comment added");
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Comment routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/posts/{id}/comments", post(add_comment))
}
