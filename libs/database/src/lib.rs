//! Database library providing MongoDB connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client, configuration and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017/inventory");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = mongodb::resolve_database(&client, &config);
//! let collection = db.collection::<Document>("items");
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
