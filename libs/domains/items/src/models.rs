use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ItemError, ItemResult};

/// Status string returned by the create endpoints.
pub const SUCCESS: &str = "Success";

/// Item as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Hex-encoded ObjectId assigned on creation
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Widget")]
    pub name: String,
    pub availability: bool,
}

/// Item as persisted in the `items` collection.
///
/// Field names match the documents already stored by earlier deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Availability")]
    pub availability: bool,
}

impl ItemDocument {
    /// Assign a fresh ObjectId to a validated input.
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            availability: input.availability,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            availability: doc.availability,
        }
    }
}

/// DTO for creating an item
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(alias = "Name")]
    #[validate(length(min = 1))]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(alias = "Availability")]
    pub availability: bool,
}

impl CreateItem {
    /// Decode a bulk request body.
    ///
    /// Anything other than a JSON array is [`ItemError::EmptyBatch`]; an element
    /// that does not decode is [`ItemError::InvalidBatchItem`]. Field rules are
    /// checked later by the service.
    pub fn batch_from_json(body: Value) -> ItemResult<Vec<Self>> {
        let Value::Array(elements) = body else {
            return Err(ItemError::EmptyBatch);
        };

        elements
            .into_iter()
            .map(|element| serde_json::from_value(element).map_err(|_| ItemError::InvalidBatchItem))
            .collect()
    }
}

/// DTO for changing the availability of one item
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateAvailability {
    /// Hex-encoded ObjectId of the item
    #[serde(alias = "_id")]
    #[validate(length(min = 1))]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[serde(alias = "Availability")]
    pub availability: bool,
}

/// Query string of `GET /getitemsbyavailability`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// `true` in any letter case selects available items, any other value unavailable ones
    #[serde(alias = "Availability")]
    #[param(example = "true")]
    pub availability: Option<String>,
}

/// Permissive boolean parsing: only `true` (any case) is true.
pub fn parse_availability(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Repository-level filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub availability: Option<bool>,
}

impl ItemFilter {
    pub fn by_availability(availability: bool) -> Self {
        Self {
            availability: Some(availability),
        }
    }
}

/// Body returned by `POST /createitems/single`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Success")]
    pub status: String,
}

impl CreatedResponse {
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_string(),
        }
    }
}

/// Body returned by `POST /createitems/bulk`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkCreatedResponse {
    #[schema(example = "Success")]
    pub status: String,
    /// Created items in request order
    pub data: Vec<Item>,
}

impl BulkCreatedResponse {
    pub fn success(data: Vec<Item>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            data,
        }
    }
}
