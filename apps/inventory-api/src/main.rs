use axum_helpers::server::create_production_app;
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{connect_from_config, resolve_database};
use eyre::WrapErr;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let dotenv_loaded = load_dotenv();
    let config = Config::from_env()?;

    init_tracing(&config.environment);
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    info!(url = %config.mongodb.redacted_url(), "Connecting to MongoDB");

    let mongo_client = connect_from_config(&config.mongodb)
        .await
        .wrap_err("failed to connect to MongoDB")?;
    let db = resolve_database(&mongo_client, &config.mongodb);

    info!(database = db.name(), "Connected to MongoDB");

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state)?;
    let server = state.config.server.clone();
    let shutdown_timeout = server.shutdown_timeout();

    info!(
        app = state.config.app.name,
        version = state.config.app.version,
        "Starting inventory API ({:?} shutdown timeout)",
        shutdown_timeout
    );

    create_production_app(app, &server, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        state.mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .wrap_err("server error")?;

    info!("Inventory API shutdown complete");
    Ok(())
}
