use crate::trivia::Question;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A category reference as sent by quiz clients: a numeric id, or a label
/// such as `"all"` or `"3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum CategorySelector {
    Id(i64),
    Label(String),
}

impl CategorySelector {
    /// `Ok(None)` selects every category. Id `0` and the label `all` both do.
    pub fn resolve(&self) -> Result<Option<i64>, String> {
        match self {
            CategorySelector::Id(0) => Ok(None),
            CategorySelector::Id(id) => Ok(Some(*id)),
            CategorySelector::Label(label) => {
                let label = label.trim();
                if label.eq_ignore_ascii_case("all") {
                    return Ok(None);
                }
                label
                    .parse::<i64>()
                    .map(|id| CategorySelector::Id(id).resolve())
                    .map_err(|_| format!("Invalid quiz category '{}'", label))?
            }
        }
    }
}

/// Quiz category, either a bare selector or the `{id, type}` object the
/// frontend sends from its category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum QuizCategory {
    Selector(CategorySelector),
    Selection {
        id: CategorySelector,
        #[serde(default, rename = "type")]
        kind: Option<String>,
    },
}

impl QuizCategory {
    pub fn category_id(&self) -> Result<Option<i64>, String> {
        match self {
            QuizCategory::Selector(selector) => selector.resolve(),
            QuizCategory::Selection { id, .. } => id.resolve(),
        }
    }
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizRequest {
    #[serde(default, alias = "previousQuestions")]
    #[ts(type = "Array<number> | null")]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default, alias = "quizCategory")]
    pub quiz_category: Option<QuizCategory>,
}

/// `question` is null once every eligible question has been played
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
