use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// A trivia question as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[ts(type = "number")]
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[ts(type = "number")]
    pub category: i64,
    #[ts(type = "number")]
    pub difficulty: i64,
}

/// Fields required to create a question; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[ts(type = "number")]
    pub category: i64,
    #[ts(type = "number")]
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    #[ts(type = "number")]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id to label, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}
