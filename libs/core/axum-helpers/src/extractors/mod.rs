//! Custom extractors for Axum handlers.
//!
//! Every extractor here rejects with [`AppError`](crate::errors::AppError), so a
//! malformed request gets the same JSON error body as any other failure.

pub mod json_body;
pub mod query;
pub mod validated_json;

pub use json_body::JsonBody;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
