//! Quiz play endpoint.

use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use trivia_core::{next_question, CategoryFilter, Question, QuestionStore};

/// Wire sentinel the frontend sends for "all categories".
const ALL_CATEGORIES_SENTINEL: &str = "click";

/// The category selection sent by the quiz client.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryInput {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl QuizCategoryInput {
    fn filter(&self) -> CategoryFilter {
        if self.kind == ALL_CATEGORIES_SENTINEL || self.id == 0 {
            CategoryFilter::AllCategories
        } else {
            CategoryFilter::ByCategory(self.id)
        }
    }
}

/// Request body for the next quiz question.
///
/// The client carries the whole quiz session: every request repeats the
/// ids of the questions already served.
#[derive(Debug, Deserialize)]
pub struct PlayQuizRequest {
    pub quiz_category: Option<QuizCategoryInput>,
    pub previous_questions: Option<Vec<i64>>,
}

/// Response for the next quiz question.
///
/// `question` is null when no unseen questions remain in the selection.
#[derive(Debug, Serialize)]
pub struct PlayQuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Serve one random not-yet-seen question.
/// POST /quizzes
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<PlayQuizRequest>, JsonRejection>,
) -> ApiResult<Json<PlayQuizResponse>> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let (Some(category), Some(previous)) = (request.quiz_category, request.previous_questions)
    else {
        return Err(ApiError::unprocessable(
            "quiz_category and previous_questions are required",
        ));
    };

    let candidates = match category.filter() {
        CategoryFilter::AllCategories => QuestionStore::list_all(state.store())?,
        CategoryFilter::ByCategory(id) => state.store().list_by_category(id)?,
    };

    let previous_ids: HashSet<i64> = previous.into_iter().collect();
    let question = next_question(candidates, &previous_ids, &mut rand::thread_rng());

    Ok(Json(PlayQuizResponse {
        success: true,
        question,
    }))
}
