//! Centralized route configuration for the trivia API.
//!
//! The binary and the integration tests mount the same router through
//! [`configure_routes`].

use crate::config::CorsConfig;
use crate::error::AppError;
use crate::handlers::{categories, index, method_not_allowed, questions, quizzes, route_not_found};
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;

/// Maps every path and method to its handler.
///
/// Malformed JSON bodies are answered with the JSON 400 envelope. A path id
/// that is not an integer matches no resource and is 404, like unknown paths.
/// Known paths with an unsupported method are 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, req| {
        AppError::NotFound(format!("No resource at {}", req.path())).into()
    }))
    .service(
        web::resource("/")
            .route(web::get().to(index::index))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/categories/{category_id}/questions")
            .route(web::get().to(categories::get_category_questions))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/questions")
            .route(web::get().to(questions::list_questions))
            .route(web::post().to(questions::post_questions))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/questions/{question_id}")
            .route(web::delete().to(questions::delete_question))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/quizzes")
            .route(web::post().to(quizzes::play_quiz))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(route_not_found));
}

/// CORS policy: the configured origins (any when `"*"` is listed), the
/// Content-Type and Authorization headers, and GET/PUT/POST/DELETE/OPTIONS.
pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "PUT", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600);

    if config.allows_any_origin() {
        cors.allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
