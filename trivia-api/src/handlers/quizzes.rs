use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use actix_web::{web, HttpResponse};
use rand::seq::IndexedRandom;
use rand::Rng;
use shared_types::{Question, QuizRequest, QuizResponse};
use std::collections::HashSet;
use tracing::info;

/// `POST /quizzes`: a random question from the chosen category that the
/// player has not seen yet
pub async fn play_quiz(
    body: web::Json<QuizRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = body.into_inner();

    let previous = previous_questions
        .ok_or_else(|| AppError::BadRequest("previous_questions is required".to_string()))?;
    let category_id = quiz_category
        .ok_or_else(|| AppError::BadRequest("quiz_category is required".to_string()))?
        .category_id()
        .map_err(AppError::BadRequest)?;

    let pool = match category_id {
        None => state.store.list_questions().await?,
        Some(id) => {
            state
                .store
                .get_category(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
            state.store.list_questions_by_category(id).await?
        }
    };

    let seen: HashSet<i64> = previous.into_iter().collect();
    let question = select_quiz_question(&pool, &seen, &mut rand::rng()).cloned();

    info!(
        category_id = ?category_id,
        pool = pool.len(),
        seen = seen.len(),
        exhausted = question.is_none(),
        "Quiz question selected"
    );

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}

/// Uniform pick among `pool` questions whose id is not in `seen`
pub fn select_quiz_question<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    seen: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|question| !seen.contains(&question.id))
        .collect();

    candidates.choose(rng).copied()
}
