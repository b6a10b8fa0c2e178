//! Validation error types and lenient value coercion

use std::fmt;

use serde_json::Value;

/// Validation error for incoming wire values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent or null
    Missing { field: &'static str },

    /// Field has a JSON type we cannot coerce
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// String value that does not parse as an integer
    NotAnInteger { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::WrongType { field, expected } => {
                write!(f, "{} must be {}", field, expected)
            }
            Self::NotAnInteger { field, value } => {
                write!(f, "{}: '{}' is not an integer", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Coerce a JSON integer or integer-like string into `i32`.
///
/// `null` and absent values yield `Ok(None)`.
pub fn lenient_int(field: &'static str, value: Option<&Value>) -> Result<Option<i32>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| ValidationError::NotAnInteger {
                field,
                value: n.to_string(),
            }),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ValidationError::NotAnInteger {
                field,
                value: s.clone(),
            }),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "an integer",
        }),
    }
}

/// Coerce a JSON string or number into text.
///
/// Numbers keep their JSON representation (`2` becomes `"2"`).
pub fn lenient_text(field: &'static str, value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string or number",
        }),
    }
}
