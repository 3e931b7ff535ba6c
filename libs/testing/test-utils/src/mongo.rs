//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs a throwaway MongoDB container.

use mongodb::{Client, Database};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("inventory_test");
/// // Hand `db` to a repository
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
}

impl TestMongo {
    /// Start a standalone MongoDB container and connect to it
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let client = Client::with_uri_str(format!("mongodb://127.0.0.1:{}", host_port))
            .await
            .expect("Failed to create MongoDB client");

        tracing::info!(port = host_port, "Test MongoDB ready");

        Self { container, client }
    }

    /// Handle to a database inside the container; created lazily on first write
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_mongo_ping() {
        let mongo = TestMongo::new().await;
        mongo
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let collection = mongo
            .database("test_utils")
            .collection::<mongodb::bson::Document>("things");

        collection.insert_one(doc! { "Name": "a" }).await.unwrap();
        let found = collection.find_one(doc! { "Name": "a" }).await.unwrap();
        assert!(found.is_some());
    }
}
