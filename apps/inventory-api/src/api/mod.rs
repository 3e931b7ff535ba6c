//! API routes module

pub mod health;
pub mod items;

use axum::Router;
use axum_helpers::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Domain routes plus readiness, all at the root path
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health::router(state.clone()))
}

/// The complete application: routes, docs, middleware and `/health`
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state))?;
    Ok(router.merge(health_router(state.config.app)))
}
