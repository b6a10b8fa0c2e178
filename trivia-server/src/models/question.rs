//! Question model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{lenient_int, lenient_text, ValidationError};

/// Question row as stored and as serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id in text form; not enforced against `categories`.
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

/// Raw body of `POST /questions`.
///
/// Every field is optional and loosely typed; presence is enforced by the
/// store's `NOT NULL` constraints, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// Question ready for insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: i32,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category.into()),
            difficulty: Some(difficulty),
        }
    }
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            question: lenient_text("question", req.question.as_ref())?,
            answer: lenient_text("answer", req.answer.as_ref())?,
            category: lenient_text("category", req.category.as_ref())?,
            difficulty: lenient_int("difficulty", req.difficulty.as_ref())?,
        })
    }
}
