//! Question operations: list, create, delete, search

use crate::db::TriviaStore;
use crate::models::{
    category_map, CategoryMap, CreateQuestionRequest, NewQuestion, Pagination, Question,
};

use super::{TriviaError, TriviaResult};

/// One page of questions plus the context the client renders around it
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub categories: CategoryMap,
    pub total_questions: i64,
}

/// Page `page` (1-based) of questions ordered by id.
///
/// A page that selects nothing is `PageOutOfRange`, including page 1 of an
/// empty table.
pub async fn list_questions<S>(store: &S, page: i64) -> TriviaResult<QuestionPage>
where
    S: TriviaStore + ?Sized,
{
    let pagination = Pagination::questions(page).ok_or(TriviaError::PageOutOfRange { page })?;

    let result = store.question_page(pagination).await?;
    if result.items.is_empty() {
        return Err(TriviaError::PageOutOfRange { page });
    }

    let categories = category_map(store.categories().await?);

    Ok(QuestionPage {
        questions: result.items,
        categories,
        total_questions: result.total,
    })
}

/// Insert a question from a loosely typed request body.
///
/// Coercion failures and store rejections are both `CreationFailed`.
pub async fn create_question<S>(store: &S, request: CreateQuestionRequest) -> TriviaResult<Question>
where
    S: TriviaStore + ?Sized,
{
    let new = NewQuestion::try_from(request).map_err(|e| TriviaError::CreationFailed(e.to_string()))?;

    let question = store
        .insert_question(&new)
        .await
        .map_err(|e| TriviaError::CreationFailed(e.to_string()))?;

    tracing::info!(question_id = question.id, "question created");
    Ok(question)
}

/// Delete the question identified by a raw path token.
///
/// A token that is not an integer cannot match any id and is `NotFound`.
/// Commit failures propagate as `Store`.
pub async fn delete_question<S>(store: &S, token: &str) -> TriviaResult<i32>
where
    S: TriviaStore + ?Sized,
{
    let id = token.trim().parse::<i32>().map_err(|_| TriviaError::NotFound {
        resource: "question",
        id: token.to_string(),
    })?;

    let deleted = store.delete_question(id).await?;
    tracing::info!(question_id = deleted, "question deleted");
    Ok(deleted)
}

/// Case-insensitive substring search on question text.
///
/// An empty term is rejected; zero matches is a normal, empty result.
pub async fn search_questions<S>(store: &S, term: &str) -> TriviaResult<Vec<Question>>
where
    S: TriviaStore + ?Sized,
{
    if term.is_empty() {
        return Err(TriviaError::EmptySearchTerm);
    }

    let questions = store.search_questions(term).await?;
    tracing::debug!(term, matches = questions.len(), "searched questions");
    Ok(questions)
}
