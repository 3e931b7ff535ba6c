use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid item id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0} query parameter is required")]
    MissingParameter(&'static str),

    #[error("Items must be a non-empty array")]
    EmptyBatch,

    #[error("Each item must have a valid name and availability")]
    InvalidBatchItem,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::InvalidId(id) => {
                AppError::InvalidIdentifier(format!("'{}' is not a valid item id", id))
            }
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            err @ ItemError::MissingParameter(_) => AppError::MissingParameter(err.to_string()),
            err @ (ItemError::EmptyBatch | ItemError::InvalidBatchItem) => {
                AppError::BadRequest(err.to_string())
            }
            ItemError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}
