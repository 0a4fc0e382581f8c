//! Category endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use trivia_core::{Category, CategoryStore, Question};

/// Build the `{id: label}` map used by category responses.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response for listing categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

/// List all categories.
/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = CategoryStore::list_all(state.store())?;
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories available"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Response for listing the questions of one category.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub category: i64,
}

/// List the questions of a category.
/// GET/POST /categories/:id/questions
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    if !state.store().exists(category_id)? {
        return Err(ApiError::not_found(format!(
            "category with id {category_id} does not exist"
        )));
    }

    let questions = state.store().list_by_category(category_id)?;
    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        category: category_id,
    }))
}
