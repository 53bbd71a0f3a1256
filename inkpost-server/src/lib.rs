//! inkpost-server: HTTP layer for the inkpost blog API
//!
//! Exposes the post store over HTTP/JSON: listing with sort/pagination,
//! create/update/delete, substring search, comments, plus health and
//! interactive docs endpoints. Ships the `inkpostd` binary.

pub mod error;
pub mod extract;
pub mod rate_limit;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use rate_limit::ClientRateLimiter;
pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
