//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use trivia_core::TriviaError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
///
/// Every failure renders this envelope with an explicit success flag.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.status.as_u16(),
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from trivia-core errors
impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::Validation { message } => ApiError::unprocessable(message),
            TriviaError::InvalidReference { category_id } => {
                ApiError::unprocessable(format!("unknown category: {category_id}"))
            }
            TriviaError::MissingSearchTerm => ApiError::bad_request("missing search term"),
            TriviaError::MalformedRequest { message } => ApiError::bad_request(message),
            TriviaError::NotFound { message } => ApiError::not_found(message),
            TriviaError::Database { message, .. } => {
                ApiError::internal(format!("database error: {message}"))
            }
            TriviaError::Io(e) => ApiError::internal(format!("io error: {e}")),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let err: ApiError = TriviaError::validation("bad").into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err: ApiError = TriviaError::invalid_reference(9).into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err: ApiError = TriviaError::MissingSearchTerm.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = TriviaError::not_found("gone").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: ApiError = TriviaError::database("locked").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
