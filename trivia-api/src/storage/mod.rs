use async_trait::async_trait;
use shared_types::{Category, NewQuestion, Question};

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::InMemoryTriviaStore;
pub use sqlite::{register_functions, SqliteTriviaStore};

/// Repository over the categories and questions tables.
///
/// Every listing is ordered by id ascending. Categories are read-only.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;
    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, StorageError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError>;
    /// Case-insensitive substring match on the question text
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StorageError>;
    /// Fails with `StorageError::NotFound` when no question has this id
    async fn delete_question(&self, question_id: i64) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage operation failed: {0}")]
    OperationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, _)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StorageError::ConstraintViolation(err.to_string())
            }
            other => StorageError::OperationFailed(other.to_string()),
        }
    }
}
