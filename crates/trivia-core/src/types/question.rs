//! Question types.

use serde::{Deserialize, Serialize};

/// Lowest difficulty accepted on create.
pub const MIN_DIFFICULTY: i64 = 1;
/// Highest difficulty accepted on create.
pub const MAX_DIFFICULTY: i64 = 5;

/// A trivia question stored in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, assigned by the store on create.
    pub id: i64,
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Difficulty rating, 1 (easiest) to 5 (hardest).
    pub difficulty: i64,
    /// Id of the category this question belongs to.
    pub category: i64,
}

/// A question as submitted for creation, before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Difficulty rating, 1 to 5.
    pub difficulty: i64,
    /// Id of the category this question belongs to.
    pub category: i64,
}

impl NewQuestion {
    /// Create a new question payload.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: i64,
        category: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            category,
        }
    }
}
