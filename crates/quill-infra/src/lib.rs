//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external database, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod store;

// Re-exports - In-Memory
pub use store::InMemoryPostStore;

// Re-exports - MongoDB
pub use store::MongoConfig;

#[cfg(feature = "mongodb")]
pub use store::MongoPostStore;
