//! Route definitions for the REST API.

mod categories;
mod health;
mod questions;
mod quizzes;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::questions_by_category).post(categories::questions_by_category),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/:id", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        // Quiz play
        .route("/quizzes", post(quizzes::play_quiz))
        // Attach state
        .with_state(state)
}

pub use categories::*;
pub use health::*;
pub use questions::*;
pub use quizzes::*;
