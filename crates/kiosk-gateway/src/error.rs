use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kiosk_core::{ShortenerError, StorageError};
use kiosk_tools::{CalculateError, ConvertError};
use kiosk_tracker::TrackerError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure a handler can report, already sorted into one of the
/// three response kinds.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("not found")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(#[source] StorageError),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl AppError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidInput(message) => message.clone(),
            AppError::NotFound => "not found".to_string(),
            AppError::Storage(source) => {
                error!(error = %source, "storage operation failed");
                "database error".to_string()
            }
            AppError::Internal(detail) => {
                error!(error = %detail, "request failed");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(error: ShortenerError) -> Self {
        match error {
            ShortenerError::InvalidUrl(_) => AppError::invalid("invalid url"),
            // A code that cannot exist cannot be found either.
            ShortenerError::InvalidShortCode(_) => AppError::NotFound,
            ShortenerError::Exhausted(attempts) => {
                AppError::Internal(format!("no free short code after {attempts} attempts"))
            }
            ShortenerError::Storage(source) => AppError::Storage(source),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(error: TrackerError) -> Self {
        match error {
            TrackerError::InvalidInput(message) => AppError::InvalidInput(message),
            TrackerError::UserNotFound(_) => AppError::NotFound,
        }
    }
}

impl From<ConvertError> for AppError {
    fn from(error: ConvertError) -> Self {
        AppError::InvalidInput(error.to_string())
    }
}

impl From<CalculateError> for AppError {
    fn from(error: CalculateError) -> Self {
        AppError::InvalidInput(error.to_string())
    }
}
