use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use actix_web::{web, HttpResponse};
use shared_types::{category_map, IndexResponse};
use tracing::info;

/// `GET /`: every question and category with their counts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let questions = state.store.list_questions().await?;
    let categories = state.store.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories available".to_string()));
    }

    info!(
        questions = questions.len(),
        categories = categories.len(),
        "Listing trivia overview"
    );

    Ok(HttpResponse::Ok().json(IndexResponse {
        success: true,
        categories: category_map(&categories),
        total_categories: categories.len(),
        total_questions: questions.len(),
        questions,
    }))
}
