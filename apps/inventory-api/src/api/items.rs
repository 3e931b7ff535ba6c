//! Items API routes

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

/// Wire the items domain to the service database
pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    handlers::router(service)
}
