//! JSON extractor with automatic validation using the validator crate.

use super::JsonBody;
use crate::errors::AppError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that also runs the `validator` rules of `T`.
///
/// Deserialization failures and rule violations both answer 400; rule
/// violations list the offending fields under `details`.
///
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1))]
///     name: String,
///     availability: bool,
/// }
///
/// async fn create(ValidatedJson(item): ValidatedJson<CreateItem>) -> String {
///     item.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = JsonBody::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
