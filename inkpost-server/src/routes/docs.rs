//! Interactive API documentation
//!
//! Serves a Swagger UI shell at `/api/docs` backed by a hand-maintained
//! OpenAPI document embedded at compile time. The schema is static; it is
//! not generated from the handlers.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

const OPENAPI_SCHEMA: &str = include_str!("../../static/openapi.json");
const DOCS_PAGE: &str = include_str!("../../static/docs.html");

/// GET /api/docs
async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// GET /api/docs/openapi.json
async fn openapi_schema() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_SCHEMA)
}

/// Documentation routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/docs", get(docs_page))
        .route("/api/docs/openapi.json", get(openapi_schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(OPENAPI_SCHEMA).unwrap();
        assert!(schema["openapi"].is_string());
        assert!(schema["paths"]["/api/posts"].is_object());
    }

    #[test]
    fn docs_page_points_at_the_schema() {
        assert!(DOCS_PAGE.contains("/api/docs/openapi.json"));
    }
}
