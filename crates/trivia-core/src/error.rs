//! Error types for trivia operations.

use thiserror::Error;

/// Result type alias for trivia operations.
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Main error type for all trivia operations.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// Input validation failed (missing or invalid fields).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A question references a category that does not exist.
    #[error("unknown category: {category_id}")]
    InvalidReference { category_id: i64 },

    /// Search was requested without a search term.
    #[error("missing search term")]
    MissingSearchTerm,

    /// The request body could not be understood.
    #[error("malformed request: {message}")]
    MalformedRequest { message: String },

    /// Entity not found.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Database operation failed.
    #[error("database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TriviaError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a malformed request error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid category reference error.
    pub fn invalid_reference(category_id: i64) -> Self {
        Self::InvalidReference { category_id }
    }
}

impl From<rusqlite::Error> for TriviaError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
