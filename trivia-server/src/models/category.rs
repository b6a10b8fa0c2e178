//! Category model

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

/// Category row. Read-only from the API's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id to type label, ordered by id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Collapse category rows into the `{id: type}` mapping the client expects.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
