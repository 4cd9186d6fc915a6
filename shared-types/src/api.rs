use crate::trivia::{CategoryMap, Question};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An integer sent either as a JSON number or as a numeric string, the way
/// HTML `<select>` values arrive from the question form. Any other JSON value
/// is kept so the handler can reject it as a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl NumericField {
    pub fn value(&self) -> Result<i64, String> {
        match self {
            NumericField::Number(value) => Ok(*value),
            NumericField::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not an integer", text)),
            NumericField::Other(value) => Err(format!("{} is not an integer", value)),
        }
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        NumericField::Number(value)
    }
}

/// Body of `POST /questions`.
///
/// The endpoint is dual purpose: a non-null `searchTerm` turns the request
/// into a search, otherwise the remaining fields describe a new question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionsPostRequest {
    #[serde(default, rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    #[ts(type = "number | string | null")]
    pub difficulty: Option<NumericField>,
    #[serde(default)]
    #[ts(type = "number | string | null")]
    pub category: Option<NumericField>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexResponse {
    pub success: bool,
    #[ts(type = "Record<string, string>")]
    pub categories: CategoryMap,
    pub questions: Vec<Question>,
    pub total_categories: usize,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoriesResponse {
    pub success: bool,
    #[ts(type = "Record<string, string>")]
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[ts(type = "Record<string, string>")]
    pub categories: CategoryMap,
    #[ts(type = "number | null")]
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[ts(type = "number")]
    pub current_category: i64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[ts(type = "number | null")]
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    #[ts(type = "number")]
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    #[ts(type = "number")]
    pub deleted: i64,
}
