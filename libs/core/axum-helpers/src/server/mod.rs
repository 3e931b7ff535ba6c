//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation UIs
//! - Liveness endpoint and readiness aggregation
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &server, server.shutdown_timeout(), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_handler, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
