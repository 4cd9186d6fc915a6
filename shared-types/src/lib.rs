use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod api;
pub mod quiz;
pub mod trivia;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use api::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedQuestionResponse,
    DeletedQuestionResponse, IndexResponse, NumericField, QuestionsPageResponse,
    QuestionsPostRequest, SearchResponse,
};
pub use quiz::{QuizCategory, QuizRequest, QuizResponse};
pub use trivia::{category_map, Category, CategoryMap, NewQuestion, Question};

// Shared models for the trivia API and its frontend

/// Body returned by every failed request
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status,
            message: message.into(),
        }
    }
}
