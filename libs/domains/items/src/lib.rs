//! Items Domain
//!
//! Inventory items (a name and an availability flag) stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← API types, stored documents
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{MongoItemRepository, ItemService, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("inventory");
//!
//! let service = ItemService::new(MongoItemRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemDocument, ItemFilter, UpdateAvailability};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;

pub use ::mongodb::bson::oid::ObjectId;
