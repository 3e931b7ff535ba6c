//! Application state management.

use mongodb::{Client, Database};

/// Shared application state, built once in `main` and cloned into routers.
///
/// Cloning is cheap: the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// Database holding the `items` collection
    pub db: Database,
}
