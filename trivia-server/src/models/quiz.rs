//! Quiz request parsing
//!
//! The quiz body is parsed by hand from a `serde_json::Value` so that every
//! shape problem surfaces as a [`ValidationError`] (and later a 422) rather
//! than a generic JSON rejection.

use serde_json::Value;

use super::validation::{lenient_int, ValidationError};

/// Category scope for a quiz. Id `0` means any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCategory {
    pub id: i32,
}

impl QuizCategory {
    /// Category id to filter on, or `None` for the wildcard.
    pub fn scope(&self) -> Option<i32> {
        (self.id != 0).then_some(self.id)
    }

    fn from_descriptor(descriptor: &Value) -> Result<Self, ValidationError> {
        let object = descriptor.as_object().ok_or(ValidationError::WrongType {
            field: "quiz_category",
            expected: "an object",
        })?;

        let id = lenient_int("quiz_category.id", object.get("id"))?
            .ok_or(ValidationError::Missing { field: "quiz_category.id" })?;

        Ok(Self { id })
    }
}

/// Parsed body of `POST /quizzes`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub category: QuizCategory,
    /// Descriptor exactly as the client sent it; echoed in the response.
    pub descriptor: Value,
}

impl QuizRequest {
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let previous_questions = match body.get("previous_questions") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    lenient_int("previous_questions", Some(item))?
                        .ok_or(ValidationError::Missing { field: "previous_questions" })
                })
                .collect::<Result<_, _>>()?,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "previous_questions",
                    expected: "a list",
                })
            }
        };

        let descriptor = match body.get("quiz_category") {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing { field: "quiz_category" })
            }
            Some(descriptor) => descriptor.clone(),
        };

        Ok(Self {
            previous_questions,
            category: QuizCategory::from_descriptor(&descriptor)?,
            descriptor,
        })
    }
}
