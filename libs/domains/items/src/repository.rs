use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemFilter};

/// Repository trait for Item persistence
///
/// Inputs are already validated by the service; implementations only store
/// and read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert one item and return it with its new id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Insert a batch in one ordered write; the result follows input order
    async fn create_many(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<Item>>;

    /// List items in natural store order
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    /// Set the availability flag and return the updated item, `None` if no item has `id`
    async fn set_availability(&self, id: ObjectId, availability: bool)
    -> ItemResult<Option<Item>>;
}
