use crate::storage::{StorageError, TriviaStore};
use crate::DbConnection;
use async_trait::async_trait;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use shared_types::{Category, NewQuestion, Question};
use std::sync::MutexGuard;
use tracing::{debug, info};

pub struct SqliteTriviaStore {
    connection: DbConnection,
}

impl SqliteTriviaStore {
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.connection
            .lock()
            .map_err(|e| StorageError::OperationFailed(format!("Lock error: {}", e)))
    }

    fn query_questions(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Question>, StorageError> {
        let mut stmt = conn.prepare(sql)?;
        let questions = stmt
            .query_map(params, question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

/// Registers `fold_case(text)`, a Unicode-aware lowercase used by search.
/// SQLite's own `lower` and `LIKE` only fold ASCII.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold_case",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|text| text.to_lowercase()))
        },
    )
}

#[async_trait]
impl TriviaStore for SqliteTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id ASC")?;
        let categories = stmt
            .query_map(params![], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, StorageError> {
        let conn = self.lock()?;

        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![category_id],
                |row| {
                    Ok(Category {
                        id: row.get(0)?,
                        kind: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(category)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        Self::query_questions(
            &conn,
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
            params![],
        )
    }

    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        Self::query_questions(
            &conn,
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?1
            ORDER BY id ASC
            "#,
            params![category_id],
        )
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        let questions = Self::query_questions(
            &conn,
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE instr(fold_case(question), fold_case(?1)) > 0
            ORDER BY id ASC
            "#,
            params![term],
        )?;

        debug!(term = %term, matches = questions.len(), "Searched questions");
        Ok(questions)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StorageError> {
        let conn = self.lock()?;

        conn.execute(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                question.question,
                question.answer,
                question.category,
                question.difficulty,
            ],
        )?;

        let id = conn.last_insert_rowid();
        info!(question_id = id, category = question.category, "Inserted question");
        Ok(question.with_id(id))
    }

    async fn delete_question(&self, question_id: i64) -> Result<(), StorageError> {
        let conn = self.lock()?;

        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![question_id])?;
        if deleted == 0 {
            return Err(StorageError::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }

        info!(question_id, "Deleted question");
        Ok(())
    }
}
