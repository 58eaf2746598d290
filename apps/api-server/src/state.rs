//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::{InMemoryPostStore, MongoConfig};

#[cfg(feature = "mongodb")]
use quill_infra::MongoPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(db_config: Option<&MongoConfig>) -> Self {
        let posts = Self::build_store(db_config).await;

        tracing::info!("Application state initialized");

        Self { posts }
    }

    /// Build state over an explicit store. Used by tests, which hand in a
    /// fresh in-memory store per test case.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    #[cfg(feature = "mongodb")]
    async fn build_store(db_config: Option<&MongoConfig>) -> Arc<dyn PostStore> {
        if let Some(config) = db_config {
            match MongoPostStore::connect(config).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostStore::new())
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Arc::new(InMemoryPostStore::new())
        }
    }

    #[cfg(not(feature = "mongodb"))]
    async fn build_store(_db_config: Option<&MongoConfig>) -> Arc<dyn PostStore> {
        tracing::info!("Running without mongodb feature - using in-memory store");
        Arc::new(InMemoryPostStore::new())
    }
}
