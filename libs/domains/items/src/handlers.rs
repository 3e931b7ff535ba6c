use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};
use axum_helpers::{
    JsonBody, QueryParams, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use serde_json::Value;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{
    AvailabilityQuery, BulkCreatedResponse, CreateItem, CreatedResponse, Item, UpdateAvailability,
    parse_availability,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        root_check,
        create_item,
        create_items,
        list_items,
        list_items_by_availability,
        update_availability,
    ),
    components(
        schemas(Item, CreateItem, UpdateAvailability, CreatedResponse, BulkCreatedResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Item routes, mounted at the root of the service
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new()
        .route("/data", get(root_check))
        .route("/createitems/single", post(create_item))
        .route("/createitems/bulk", post(create_items))
        .route("/getallitems", get(list_items))
        .route("/getitemsbyavailability", get(list_items_by_availability))
        .route("/updateAvailability", put(update_availability))
        .with_state(service)
}

/// Static root check
#[utoipa::path(
    get,
    path = "/data",
    tag = "Items",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
async fn root_check() -> &'static str {
    "Hello world"
}

/// Create a single item
#[utoipa::path(
    post,
    path = "/createitems/single",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = CreatedResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<Json<CreatedResponse>> {
    service.create_item(input).await?;
    Ok(Json(CreatedResponse::success()))
}

/// Create items in bulk
///
/// The body must be a non-empty array and every element must be a valid item;
/// otherwise nothing is stored.
#[utoipa::path(
    post,
    path = "/createitems/bulk",
    tag = "Items",
    request_body = Vec<CreateItem>,
    responses(
        (status = 200, description = "Items created, in request order", body = BulkCreatedResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_items<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    JsonBody(body): JsonBody<Value>,
) -> ItemResult<Json<BulkCreatedResponse>> {
    let inputs = CreateItem::batch_from_json(body)?;
    let items = service.create_items(inputs).await?;
    Ok(Json(BulkCreatedResponse::success(items)))
}

/// List every item
#[utoipa::path(
    get,
    path = "/getallitems",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<ItemService<R>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// List items by availability
#[utoipa::path(
    get,
    path = "/getitemsbyavailability",
    tag = "Items",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items_by_availability<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    QueryParams(query): QueryParams<AvailabilityQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let raw = query
        .availability
        .ok_or(ItemError::MissingParameter("availability"))?;
    let items = service
        .list_items_by_availability(parse_availability(&raw))
        .await?;
    Ok(Json(items))
}

/// Set the availability of an item
#[utoipa::path(
    put,
    path = "/updateAvailability",
    tag = "Items",
    request_body = UpdateAvailability,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_availability<R: ItemRepository>(
    State(service): State<ItemService<R>>,
    ValidatedJson(input): ValidatedJson<UpdateAvailability>,
) -> ItemResult<Json<Item>> {
    let item = service.update_availability(input).await?;
    Ok(Json(item))
}
