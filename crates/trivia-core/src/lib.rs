//! trivia-core - Core library for the trivia API.
//!
//! This crate provides the domain types, the store traits with their
//! SQLite implementation, pagination, and quiz question selection for
//! the trivia API server.
//!
//! # Example
//!
//! ```ignore
//! use trivia_core::{NewQuestion, QuestionStore, SqliteStore};
//!
//! let store = SqliteStore::open("trivia.db")?;
//! let question = store.create(NewQuestion::new(
//!     "Which planet is closest to the sun?",
//!     "Mercury",
//!     2,
//!     1,
//! ))?;
//! ```

pub mod error;
pub mod pagination;
pub mod quiz;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{TriviaError, TriviaResult};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, CategoryFilter};
pub use store::{CategoryStore, QuestionStore, SqliteStore, TriviaStore};
pub use types::{Category, NewQuestion, Question};
