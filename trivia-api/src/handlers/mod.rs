use crate::error::{AppError, AppResult};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::storage::TriviaStore;
use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

pub mod categories;
pub mod index;
pub mod questions;
pub mod quizzes;

pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub page_size: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

pub async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

pub async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}
