//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemDocument, ItemFilter};
use crate::repository::ItemRepository;

/// Collection holding item documents
pub const COLLECTION_NAME: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// ```ignore
    /// let db = client.database("inventory");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Use a collection other than `items`, e.g. per-test isolation
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<ItemDocument> {
        &self.collection
    }

    fn build_filter(filter: &ItemFilter) -> Document {
        let mut doc = doc! {};

        if let Some(availability) = filter.availability {
            doc.insert("Availability", availability);
        }

        doc
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let document = ItemDocument::new(input);

        self.collection.insert_one(&document).await?;

        tracing::info!(item_id = %document.id, "Item created");
        Ok(document.into())
    }

    #[instrument(skip(self, inputs), fields(batch_size = inputs.len()))]
    async fn create_many(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<Item>> {
        let documents: Vec<ItemDocument> = inputs.into_iter().map(ItemDocument::new).collect();

        if let Err(e) = self.collection.insert_many(&documents).await {
            tracing::error!(
                batch_size = documents.len(),
                error = %e,
                "Bulk insert failed; documents before the failing one may be persisted"
            );
            return Err(e.into());
        }

        tracing::info!(count = documents.len(), "Items created");
        Ok(documents.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(Self::build_filter(&filter)).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_availability(
        &self,
        id: ObjectId,
        availability: bool,
    ) -> ItemResult<Option<Item>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "Availability": availability } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(item_id = %id, availability, "Item availability updated");
        }

        Ok(updated.map(Item::from))
    }
}
