use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{0}")]
    Validation(String),

    #[error("Item with id {0} not found")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(id) => AppError::NotFound(ItemError::NotFound(id).to_string()),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<validator::ValidationErrors> for ItemError {
    fn from(err: validator::ValidationErrors) -> Self {
        ItemError::Validation(err.to_string())
    }
}
