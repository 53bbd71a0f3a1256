//! Application state shared across handlers

use std::sync::Arc;

use tokio::sync::RwLock;

use inkpost_core::PostStore;

/// Shared application state
///
/// Every mutation runs under a single write guard, so id assignment and
/// insertion are atomic under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<PostStore>>,
}

impl AppState {
    /// State backed by the two starter posts.
    pub fn seeded() -> Self {
        Self::with_store(PostStore::seeded())
    }

    /// State around an arbitrary store; test fixtures build on this.
    pub fn with_store(store: PostStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn store(&self) -> &RwLock<PostStore> {
        &self.store
    }
}
