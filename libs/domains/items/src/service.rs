//! Item Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateAvailability};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Every check runs before the repository is touched, so a rejected request
/// never writes anything.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a single item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Create a non-empty batch of items.
    ///
    /// All elements are validated first; a single invalid element rejects the
    /// whole batch.
    #[instrument(skip(self, inputs), fields(batch_size = inputs.len()))]
    pub async fn create_items(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<Item>> {
        if inputs.is_empty() {
            return Err(ItemError::EmptyBatch);
        }

        if inputs.iter().any(|input| input.validate().is_err()) {
            return Err(ItemError::InvalidBatchItem);
        }

        self.repository.create_many(inputs).await
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list(ItemFilter::default()).await
    }

    #[instrument(skip(self))]
    pub async fn list_items_by_availability(&self, availability: bool) -> ItemResult<Vec<Item>> {
        self.repository
            .list(ItemFilter::by_availability(availability))
            .await
    }

    /// Set the availability of an existing item and return it
    #[instrument(skip(self, input), fields(item_id = %input.id))]
    pub async fn update_availability(&self, input: UpdateAvailability) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let id = ObjectId::parse_str(&input.id).map_err(|_| ItemError::InvalidId(input.id.clone()))?;

        self.repository
            .set_availability(id, input.availability)
            .await?
            .ok_or(ItemError::NotFound(input.id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
