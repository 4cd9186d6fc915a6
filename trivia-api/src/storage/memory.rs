use crate::storage::{StorageError, TriviaStore};
use shared_types::{Category, NewQuestion, Question};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct State {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

/// Map-backed store with the same semantics as the SQLite one, including
/// the category foreign key and never reusing a deleted question id.
#[derive(Clone, Default)]
pub struct InMemoryTriviaStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.lock() {
            state.categories = categories
                .into_iter()
                .map(|category| (category.id, category))
                .collect();
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::OperationFailed(format!("Lock error: {}", e)))
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>, StorageError> {
        Ok(self
            .lock()?
            .questions
            .values()
            .filter(|question| keep(question))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl TriviaStore for InMemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.lock()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, StorageError> {
        Ok(self.lock()?.categories.get(&category_id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        self.filtered(|_| true)
    }

    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError> {
        self.filtered(|question| question.category == category_id)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let needle = term.to_lowercase();
        self.filtered(|question| question.question.to_lowercase().contains(&needle))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StorageError> {
        let mut state = self.lock()?;

        if !state.categories.contains_key(&question.category) {
            return Err(StorageError::ConstraintViolation(format!(
                "Category {} does not exist",
                question.category
            )));
        }

        state.last_question_id += 1;
        let created = question.with_id(state.last_question_id);
        state.questions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_question(&self, question_id: i64) -> Result<(), StorageError> {
        self.lock()?
            .questions
            .remove(&question_id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(format!("Question {} not found", question_id)))
    }
}
