//! Handler tests for the Items domain
//!
//! These tests drive the HTTP handlers against an in-memory repository:
//! - Request deserialization and validation
//! - Response bodies and status codes
//! - Error responses, including store failures
//!
//! The MongoDB-backed flow is covered by `integration_test.rs`.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use test_utils::{TestDataBuilder, assertions::assert_object_id_hex};
use tower::ServiceExt; // For oneshot()

/// Vec-backed repository; clones share the same storage
#[derive(Clone, Default)]
struct InMemoryItems {
    items: Arc<Mutex<Vec<Item>>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryItems {
    fn app(&self) -> Router {
        handlers::router(ItemService::new(self.clone()))
    }

    fn snapshot(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }

    fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn insert(&self, input: CreateItem) -> Item {
        let item = Item {
            id: ObjectId::new().to_hex(),
            name: input.name,
            availability: input.availability,
        };
        self.items.lock().unwrap().push(item.clone());
        item
    }
}

#[async_trait]
impl ItemRepository for InMemoryItems {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        *self.writes.lock().unwrap() += 1;
        Ok(self.insert(input))
    }

    async fn create_many(&self, inputs: Vec<CreateItem>) -> ItemResult<Vec<Item>> {
        *self.writes.lock().unwrap() += 1;
        Ok(inputs.into_iter().map(|input| self.insert(input)).collect())
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|item| filter.availability.is_none_or(|a| item.availability == a))
            .collect())
    }

    async fn set_availability(&self, id: ObjectId, availability: bool) -> ItemResult<Option<Item>> {
        let mut items = self.items.lock().unwrap();
        let hex = id.to_hex();
        Ok(items.iter_mut().find(|item| item.id == hex).map(|item| {
            item.availability = availability;
            item.clone()
        }))
    }
}

/// Repository whose every call fails like an unreachable server
struct BrokenStore;

#[async_trait]
impl ItemRepository for BrokenStore {
    async fn create(&self, _: CreateItem) -> ItemResult<Item> {
        Err(ItemError::Database("server selection timeout".to_string()))
    }

    async fn create_many(&self, _: Vec<CreateItem>) -> ItemResult<Vec<Item>> {
        Err(ItemError::Database("server selection timeout".to_string()))
    }

    async fn list(&self, _: ItemFilter) -> ItemResult<Vec<Item>> {
        Err(ItemError::Database("server selection timeout".to_string()))
    }

    async fn set_availability(&self, _: ObjectId, _: bool) -> ItemResult<Option<Item>> {
        Err(ItemError::Database("server selection timeout".to_string()))
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_check_returns_hello_world() {
    let store = InMemoryItems::default();

    let response = store.app().oneshot(get("/data")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Hello world");
}

#[tokio::test]
async fn test_create_single_then_visible_in_list() {
    let store = InMemoryItems::default();
    let builder = TestDataBuilder::from_test_name("create_single_then_list");
    let name = builder.name("item", "widget");

    let response = store
        .app()
        .oneshot(json_request(
            "POST",
            "/createitems/single",
            json!({"name": name, "availability": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"status": "Success"}));

    let response = store.app().oneshot(get("/getallitems")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, name);
    assert!(items[0].availability);
    assert_object_id_hex(&items[0].id, "listed item id");
}

#[tokio::test]
async fn test_create_single_accepts_capitalized_keys() {
    let store = InMemoryItems::default();

    let response = store
        .app()
        .oneshot(json_request(
            "POST",
            "/createitems/single",
            json!({"Name": "Widget", "Availability": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.snapshot()[0].name, "Widget");
}

#[tokio::test]
async fn test_create_single_rejects_invalid_input() {
    let store = InMemoryItems::default();

    for body in [
        json!({"availability": true}),
        json!({"name": "Widget"}),
        json!({"name": "Widget", "availability": "true"}),
        json!({"name": "", "availability": true}),
        json!({"name": 42, "availability": true}),
    ] {
        let response = store
            .app()
            .oneshot(json_request("POST", "/createitems/single", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_create_single_store_failure_is_generic_500() {
    let app = handlers::router(ItemService::new(BrokenStore));

    let response = app
        .oneshot(json_request(
            "POST",
            "/createitems/single",
            json!({"name": "Widget", "availability": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Something went wrong");
}

#[tokio::test]
async fn test_bulk_create_returns_items_in_order() {
    let store = InMemoryItems::default();
    let builder = TestDataBuilder::from_test_name("bulk_in_order");
    let names: Vec<String> = (0..3).map(|i| builder.name("item", &i.to_string())).collect();
    let payload: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({"name": name, "availability": builder.availability(i)}))
        .collect();

    let response = store
        .app()
        .oneshot(json_request("POST", "/createitems/bulk", json!(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Success");

    let data: Vec<Item> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(data.len(), 3);
    for (i, item) in data.iter().enumerate() {
        assert_eq!(item.name, names[i]);
        assert_eq!(item.availability, builder.availability(i));
        assert_object_id_hex(&item.id, "bulk item id");
    }
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_bulk_create_rejects_empty_array() {
    let store = InMemoryItems::default();

    let response = store
        .app()
        .oneshot(json_request("POST", "/createitems/bulk", json!([])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Items must be a non-empty array");
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_bulk_create_rejects_non_array() {
    let store = InMemoryItems::default();

    let response = store
        .app()
        .oneshot(json_request(
            "POST",
            "/createitems/bulk",
            json!({"name": "Widget", "availability": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_bulk_create_rejects_batch_with_one_bad_element() {
    let store = InMemoryItems::default();

    for bad in [
        json!({"availability": true}),
        json!({"name": "B", "availability": "no"}),
        json!({"name": "", "availability": false}),
    ] {
        let response = store
            .app()
            .oneshot(json_request(
                "POST",
                "/createitems/bulk",
                json!([{"name": "A", "availability": true}, bad]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(
            body["message"],
            "Each item must have a valid name and availability"
        );
    }

    assert_eq!(store.writes(), 0);
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn test_bulk_create_store_failure_is_500() {
    let app = handlers::router(ItemService::new(BrokenStore));

    let response = app
        .oneshot(json_request(
            "POST",
            "/createitems/bulk",
            json!([{"name": "A", "availability": true}]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_by_availability_is_case_insensitive() {
    let store = InMemoryItems::default();
    store.insert(CreateItem {
        name: "Widget".to_string(),
        availability: true,
    });
    store.insert(CreateItem {
        name: "Gadget".to_string(),
        availability: false,
    });

    for value in ["true", "TrUe", "TRUE"] {
        let response = store
            .app()
            .oneshot(get(&format!("/getitemsbyavailability?availability={value}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let items: Vec<Item> = json_body(response.into_body()).await;
        assert_eq!(items.len(), 1, "value: {value}");
        assert_eq!(items[0].name, "Widget");
    }
}

#[tokio::test]
async fn test_list_by_availability_other_values_mean_false() {
    let store = InMemoryItems::default();
    store.insert(CreateItem {
        name: "Widget".to_string(),
        availability: true,
    });
    store.insert(CreateItem {
        name: "Gadget".to_string(),
        availability: false,
    });

    for value in ["yes", "false", "1", ""] {
        let response = store
            .app()
            .oneshot(get(&format!("/getitemsbyavailability?availability={value}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let items: Vec<Item> = json_body(response.into_body()).await;
        assert_eq!(items.len(), 1, "value: {value}");
        assert_eq!(items[0].name, "Gadget");
    }
}

#[tokio::test]
async fn test_list_by_availability_accepts_capitalized_parameter() {
    let store = InMemoryItems::default();
    store.insert(CreateItem {
        name: "Widget".to_string(),
        availability: true,
    });

    let response = store
        .app()
        .oneshot(get("/getitemsbyavailability?Availability=true"))
        .await
        .unwrap();

    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_list_by_availability_requires_parameter() {
    let store = InMemoryItems::default();

    let response = store
        .app()
        .oneshot(get("/getitemsbyavailability"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "MISSING_PARAMETER");
}

#[tokio::test]
async fn test_list_all_store_failure_is_500() {
    let app = handlers::router(ItemService::new(BrokenStore));

    let response = app.oneshot(get("/getallitems")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_availability_returns_updated_item() {
    let store = InMemoryItems::default();
    let created = store.insert(CreateItem {
        name: "Widget".to_string(),
        availability: true,
    });

    let response = store
        .app()
        .oneshot(json_request(
            "PUT",
            "/updateAvailability",
            json!({"id": created.id, "availability": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, created.id);
    assert_eq!(item.name, "Widget");
    assert!(!item.availability);

    let response = store.app().oneshot(get("/getallitems")).await.unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(!items[0].availability);
}

#[tokio::test]
async fn test_update_unknown_id_is_404_without_mutation() {
    let store = InMemoryItems::default();
    store.insert(CreateItem {
        name: "Widget".to_string(),
        availability: true,
    });
    let before = store.snapshot();

    let response = store
        .app()
        .oneshot(json_request(
            "PUT",
            "/updateAvailability",
            json!({"id": ObjectId::new().to_hex(), "availability": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_update_rejects_invalid_input() {
    let store = InMemoryItems::default();

    for (body, error) in [
        (json!({"availability": true}), "INVALID_JSON"),
        (json!({"id": ObjectId::new().to_hex()}), "INVALID_JSON"),
        (
            json!({"id": ObjectId::new().to_hex(), "availability": "false"}),
            "INVALID_JSON",
        ),
        (json!({"id": "", "availability": true}), "VALIDATION_ERROR"),
        (json!({"id": "xyz", "availability": true}), "INVALID_IDENTIFIER"),
    ] {
        let response = store
            .app()
            .oneshot(json_request("PUT", "/updateAvailability", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let response_body: Value = json_body(response.into_body()).await;
        assert_eq!(response_body["error"], error, "body: {body}");
    }
}

#[tokio::test]
async fn test_update_store_failure_is_500() {
    let app = handlers::router(ItemService::new(BrokenStore));

    let response = app
        .oneshot(json_request(
            "PUT",
            "/updateAvailability",
            json!({"id": ObjectId::new().to_hex(), "availability": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_widget_example_flow() {
    let store = InMemoryItems::default();

    let response = store
        .app()
        .oneshot(json_request(
            "POST",
            "/createitems/single",
            json!({"name": "Widget", "availability": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = store
        .app()
        .oneshot(get("/getitemsbyavailability?availability=true"))
        .await
        .unwrap();
    let items: Vec<Value> = json_body(response.into_body()).await;
    assert!(
        items
            .iter()
            .any(|item| item["name"] == "Widget" && item["availability"] == true)
    );
}
