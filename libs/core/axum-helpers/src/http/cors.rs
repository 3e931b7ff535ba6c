use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Comma-separated list of origins allowed to call the API.
pub const CORS_ALLOWED_ORIGIN_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer restricted to the given origins.
///
/// Allows the methods the JSON API uses (GET, POST, PUT, OPTIONS) together
/// with `Content-Type` and `Accept`, and lets browsers cache the preflight
/// for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a CORS layer that accepts any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Unset or blank means permissive. Otherwise every comma-separated entry must
/// be a valid header value.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    match std::env::var(CORS_ALLOWED_ORIGIN_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let origins = parse_origins(&raw)?;
            tracing::info!(origins = %raw, "CORS restricted to configured origins");
            Ok(create_cors_layer(origins))
        }
        _ => {
            tracing::debug!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
            Ok(create_permissive_cors_layer())
        }
    }
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid {CORS_ALLOWED_ORIGIN_ENV} entry '{origin}': {e}"),
                )
            })
        })
        .collect()
}
