use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wraps the API routes with documentation UIs and cross-cutting middleware.
///
/// The returned router serves:
/// - `apis` at the root (state already applied by the domain router)
/// - Swagger UI at `/swagger-ui`, ReDoc at `/redoc`, RapiDoc at `/rapidoc`,
///   Scalar at `/scalar`, and the raw document at `/api-docs/openapi.json`
/// - a JSON 404 for anything else
///
/// Layers: request tracing, security headers, CORS (see
/// [`cors_layer_from_env`]), response compression.
///
/// Health endpoints are not included; merge [`health_router`](super::health_router)
/// and the app's readiness route into the result.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` contains an invalid origin.
///
/// ```ignore
/// let api_routes = domain_items::handlers::router(service);
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// On shutdown the listener stops accepting and in-flight requests are
/// drained. `cleanup` starts only once the server has stopped, and is
/// abandoned after `shutdown_timeout`. If the server exits with an error,
/// cleanup still runs before the error is returned.
///
/// ```ignore
/// let cleanup = async move {
///     client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    // The signal task owns the only sender, so the receiver never closes early.
    let (coordinator, shutdown_rx) = ShutdownCoordinator::new();
    let signal_task = tokio::spawn(async move { coordinator.wait_for_signal().await });

    let result = serve_until_shutdown(listener, router, shutdown_rx, shutdown_timeout, cleanup).await;
    signal_task.abort();
    result
}

async fn serve_until_shutdown<F>(
    listener: TcpListener,
    router: Router,
    mut shutdown_rx: broadcast::Receiver<()>,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Server stopped, starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
