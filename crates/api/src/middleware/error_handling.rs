//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the absence API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses, ensuring a consistent error handling experience across
//! the entire API.

use absence_core::errors::AbsenceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `AbsenceError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
///
/// # Example
///
/// ```
/// use absence_api::middleware::error_handling::AppError;
/// use absence_core::errors::AbsenceError;
/// use axum::Json;
///
/// async fn handler(id: i32) -> Result<Json<i32>, AppError> {
///     if id < 0 {
///         return Err(AppError(AbsenceError::NotFound(format!("Slot with ID {} not found", id))));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AbsenceError);

impl AppError {
    /// HTTP status code for the wrapped error
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AbsenceError::NotFound(_) => StatusCode::NOT_FOUND,
            AbsenceError::SessionTypeNotFound { .. } => StatusCode::NOT_FOUND,
            AbsenceError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AbsenceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AbsenceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors to HTTP responses
///
/// Server-side failures are logged here, once, before the message goes out.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        // Combine status code and JSON body into a response
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Automatic conversion from AbsenceError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, AbsenceError>` in handler functions that return `Result<T, AppError>`.
impl From<AbsenceError> for AppError {
    fn from(err: AbsenceError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Wraps the report in an `AbsenceError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AbsenceError::Database(err))
    }
}

/// Maps an AbsenceError to an HTTP response
///
/// # Arguments
///
/// * `err` - The AbsenceError to convert
///
/// # Returns
///
/// * `Response` - An HTTP response with appropriate status code and body
pub fn map_error(err: AbsenceError) -> Response {
    AppError(err).into_response()
}
