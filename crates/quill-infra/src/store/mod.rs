//! Post store adapters.

mod memory;

#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
mod mongo;

pub use memory::InMemoryPostStore;

#[cfg(feature = "mongodb")]
pub use mongo::MongoPostStore;

/// Configuration for the MongoDB connection.
///
/// Defined unconditionally so the configuration layer can parse it even
/// when the `mongodb` feature is off.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
}
