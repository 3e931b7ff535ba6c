//! MongoDB connector and utilities

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect_from_config, resolve_database};
pub use health::{HealthStatus, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
