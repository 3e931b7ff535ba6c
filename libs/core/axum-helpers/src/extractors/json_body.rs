//! JSON body extractor rejecting with the standard JSON error body.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but any rejection (syntax error, missing field, wrong
/// type, wrong content type) becomes an [`AppError`] answered with 400.
/// A body over the size limit is answered with 413.
///
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_many(JsonBody(items): JsonBody<Vec<CreateItem>>) -> String {
///     format!("{} items", items.len())
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
