//! Question CRUD and search endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::routes::categories::category_map;
use crate::state::AppState;
use trivia_core::{
    paginate, CategoryStore, NewQuestion, Question, QuestionStore, QUESTIONS_PER_PAGE,
};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    /// Requested page, parsed leniently: absent or non-numeric means 1.
    pub page: Option<String>,
}

impl ListQuestionsQuery {
    fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

/// Response for listing questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
}

/// List questions, one fixed-size page at a time.
/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuestionsQuery>,
) -> ApiResult<Json<QuestionsResponse>> {
    let all = QuestionStore::list_all(state.store())?;
    if all.is_empty() {
        return Err(ApiError::not_found("no questions available"));
    }

    // A page past the end of a non-empty collection is a valid empty page.
    let questions = paginate(&all, query.page(), QUESTIONS_PER_PAGE);
    let categories = CategoryStore::list_all(state.store())?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories: category_map(categories),
    }))
}

/// Request body for creating a question.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// Response for creating a question.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

/// Create a question.
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<CreateQuestionResponse>> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let (Some(question), Some(answer), Some(difficulty), Some(category)) = (
        request.question,
        request.answer,
        request.difficulty,
        request.category,
    ) else {
        return Err(ApiError::unprocessable(
            "question, answer, difficulty and category are required",
        ));
    };

    let created = state
        .store()
        .create(NewQuestion::new(question, answer, difficulty, category))?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        answer: created.answer,
        difficulty: created.difficulty,
        category: created.category,
    }))
}

/// Response for deleting a question.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}

/// Delete a question.
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> ApiResult<Json<DeleteQuestionResponse>> {
    state.store().delete(question_id)?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Request body for searching questions.
#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for searching questions.
#[derive(Debug, Serialize)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Search questions by a case-insensitive substring of their text.
/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> ApiResult<Json<SearchQuestionsResponse>> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;

    // An absent term gets the same treatment as an empty one.
    let term = request.search_term.unwrap_or_default();
    let questions = state.store().search(&term)?;
    let total_questions = questions.len();

    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions,
        total_questions,
    }))
}
