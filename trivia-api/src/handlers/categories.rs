use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::models::PageQuery;
use crate::pagination::paginate;
use actix_web::{web, HttpResponse};
use shared_types::{category_map, CategoriesResponse, CategoryQuestionsResponse};
use tracing::info;

/// `GET /categories`
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.store.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories available".to_string()));
    }

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// `GET /categories/{id}/questions`
pub async fn get_category_questions(
    category_id: web::Path<i64>,
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let category_id = category_id.into_inner();

    let category = state
        .store
        .get_category(category_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

    let selection = state.store.list_questions_by_category(category.id).await?;
    let page = paginate(&selection, query.page(), state.page_size).to_vec();

    info!(
        category_id,
        page = query.page(),
        returned = page.len(),
        total = selection.len(),
        "Listing questions for category"
    );

    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions: selection.len(),
        current_category: category.id,
    }))
}
