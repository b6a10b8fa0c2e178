//! Category operations

use crate::db::TriviaStore;
use crate::models::{category_map, Category, CategoryMap, Question};

use super::{TriviaError, TriviaResult};

/// Questions of one category together with the category row
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// All categories as `{id: type}`, ordered by id.
pub async fn list_categories<S>(store: &S) -> TriviaResult<CategoryMap>
where
    S: TriviaStore + ?Sized,
{
    let categories = store.categories().await?;
    Ok(category_map(categories))
}

/// Questions filed under category `id`.
///
/// An unknown category and a category with no questions are both
/// `NotFound`; the client treats them the same way.
pub async fn category_questions<S>(store: &S, id: i32) -> TriviaResult<CategoryQuestions>
where
    S: TriviaStore + ?Sized,
{
    let category = store
        .category(id)
        .await?
        .ok_or_else(|| TriviaError::NotFound {
            resource: "category",
            id: id.to_string(),
        })?;

    let questions = store.questions_in_category(&id.to_string()).await?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound {
            resource: "category questions",
            id: id.to_string(),
        });
    }

    tracing::debug!(category_id = id, count = questions.len(), "listed category questions");
    Ok(CategoryQuestions { category, questions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::NewQuestion;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_category(2, "Art")
            .with_category(1, "Science")
            .with_category(6, "Sports")
            .with_question(NewQuestion::new("What is H2O?", "Water", "1", 1))
            .with_question(NewQuestion::new("Who painted Guernica?", "Picasso", "2", 2))
            .with_question(NewQuestion::new("Speed of light?", "c", "1", 4))
    }

    #[tokio::test]
    async fn categories_are_ordered() {
        let map = list_categories(&store()).await.unwrap();
        let labels: Vec<_> = map.values().cloned().collect();
        assert_eq!(labels, vec!["Science", "Art", "Sports"]);
    }

    #[tokio::test]
    async fn questions_for_known_category() {
        let result = category_questions(&store(), 1).await.unwrap();
        assert_eq!(result.category.kind, "Science");
        assert_eq!(
            result.questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let err = category_questions(&store(), 50).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound { resource: "category", .. }));
    }

    #[tokio::test]
    async fn empty_category_is_not_found() {
        let err = category_questions(&store(), 6).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound { .. }));
    }

    #[tokio::test]
    async fn store_failure_is_not_masked_as_not_found() {
        let store = store();
        store.set_unavailable(true);
        let err = category_questions(&store, 1).await.unwrap_err();
        assert!(matches!(err, TriviaError::Store(_)));
    }
}
