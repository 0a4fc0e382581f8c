//! Storage traits and implementations.
//!
//! The HTTP layer holds the store as `Arc<dyn TriviaStore>`, injected at
//! construction, so handlers never touch a global connection handle.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::TriviaResult;
use crate::types::{Category, NewQuestion, Question};

/// Trait for question storage operations.
pub trait QuestionStore: Send + Sync {
    /// Get all questions, ordered by id ascending.
    fn list_all(&self) -> TriviaResult<Vec<Question>>;

    /// Get all questions in a category, ordered by id ascending.
    fn list_by_category(&self, category_id: i64) -> TriviaResult<Vec<Question>>;

    /// Case-insensitive substring search over the question text.
    ///
    /// An empty or whitespace-only term is a caller error
    /// (`MissingSearchTerm`), not an empty result.
    fn search(&self, term: &str) -> TriviaResult<Vec<Question>>;

    /// Insert a new question and assign it a fresh id.
    ///
    /// Fails with `Validation` on missing fields or an out-of-range
    /// difficulty, and with `InvalidReference` when the category id is
    /// unknown.
    fn create(&self, new: NewQuestion) -> TriviaResult<Question>;

    /// Delete a question by id. Fails with `NotFound` if it does not exist.
    fn delete(&self, id: i64) -> TriviaResult<()>;
}

/// Trait for category lookup operations.
pub trait CategoryStore: Send + Sync {
    /// Get all categories, ordered by label.
    fn list_all(&self) -> TriviaResult<Vec<Category>>;

    /// Whether a category with this id exists.
    fn exists(&self, id: i64) -> TriviaResult<bool>;
}

/// Combined store interface held by the server.
pub trait TriviaStore: QuestionStore + CategoryStore {}

impl<T: QuestionStore + CategoryStore> TriviaStore for T {}
