use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::models::PageQuery;
use crate::pagination::paginate;
use crate::storage::StorageError;
use actix_web::{web, HttpResponse};
use shared_types::{
    category_map, CreatedQuestionResponse, DeletedQuestionResponse, NewQuestion,
    QuestionsPageResponse, QuestionsPostRequest, SearchResponse,
};
use tracing::{error, info};

/// `GET /questions?page=N`
pub async fn list_questions(
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let selection = state.store.list_questions().await?;
    let page = paginate(&selection, query.page(), state.page_size).to_vec();

    if page.is_empty() {
        return Err(AppError::NotFound(format!(
            "Page {} has no questions",
            query.page()
        )));
    }

    let categories = state.store.list_categories().await?;

    Ok(HttpResponse::Ok().json(QuestionsPageResponse {
        success: true,
        questions: page,
        total_questions: selection.len(),
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    question_id: web::Path<i64>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let question_id = question_id.into_inner();

    match state.store.delete_question(question_id).await {
        Ok(()) => {
            info!(question_id, "Question deleted");
            Ok(HttpResponse::Ok().json(DeletedQuestionResponse {
                success: true,
                deleted: question_id,
            }))
        }
        Err(StorageError::NotFound(msg)) => Err(AppError::NotFound(msg)),
        Err(e) => {
            error!(error = %e, question_id, "Failed to delete question");
            Err(AppError::Unprocessable(format!(
                "Could not delete question {}: {}",
                question_id, e
            )))
        }
    }
}

/// `POST /questions`: searches when `searchTerm` is present, creates otherwise
pub async fn post_questions(
    query: web::Query<PageQuery>,
    body: web::Json<QuestionsPostRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    if let Some(term) = body.search_term.as_deref() {
        return search_questions(term, query.page(), &state).await;
    }

    create_question(body, query.page(), &state).await
}

async fn search_questions(term: &str, page: usize, state: &AppState) -> AppResult<HttpResponse> {
    let selection = state.store.search_questions(term).await?;

    if selection.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions match '{}'",
            term
        )));
    }

    info!(term = %term, matches = selection.len(), "Search completed");

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        questions: paginate(&selection, page, state.page_size).to_vec(),
        total_questions: selection.len(),
        current_category: None,
    }))
}

async fn create_question(
    body: QuestionsPostRequest,
    page: usize,
    state: &AppState,
) -> AppResult<HttpResponse> {
    let new_question = required_fields(body)?;

    let created = state
        .store
        .insert_question(new_question)
        .await
        .map_err(|e| match e {
            StorageError::Validation(msg) => AppError::Validation(msg),
            other => {
                error!(error = %other, "Failed to insert question");
                AppError::Unprocessable(format!("Could not create question: {}", other))
            }
        })?;

    info!(question_id = created.id, "Question created");

    let selection = state.store.list_questions().await?;

    Ok(HttpResponse::Ok().json(CreatedQuestionResponse {
        success: true,
        created: created.id,
        questions: paginate(&selection, page, state.page_size).to_vec(),
        total_questions: selection.len(),
    }))
}

/// All four fields must be present and non-null; difficulty and category
/// must be integers or numeric strings
fn required_fields(body: QuestionsPostRequest) -> AppResult<NewQuestion> {
    let mut missing = Vec::new();
    if body.question.is_none() {
        missing.push("question");
    }
    if body.answer.is_none() {
        missing.push("answer");
    }
    if body.difficulty.is_none() {
        missing.push("difficulty");
    }
    if body.category.is_none() {
        missing.push("category");
    }

    match (body.question, body.answer, body.difficulty, body.category) {
        (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
            question,
            answer,
            category: category
                .value()
                .map_err(|e| AppError::Validation(format!("category: {}", e)))?,
            difficulty: difficulty
                .value()
                .map_err(|e| AppError::Validation(format!("difficulty: {}", e)))?,
        }),
        _ => Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ))),
    }
}
