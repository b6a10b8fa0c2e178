//! Quiz question selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::db::TriviaStore;
use crate::models::{Question, QuizRequest};

use super::{TriviaError, TriviaResult};

/// Result of asking for the next quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question from the requested scope
    Question(Question),
    /// Every question in scope has already been asked
    Exhausted,
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Question(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Pick a random question from `candidates` whose id is not in `previous`.
pub fn pick_question<R>(candidates: Vec<Question>, previous: &[i32], rng: &mut R) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let pool: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    pool.choose(rng)
        .cloned()
        .map_or(QuizOutcome::Exhausted, QuizOutcome::Question)
}

/// Next quiz question for a raw `POST /quizzes` body.
///
/// A malformed body or an unknown (non-wildcard) category is
/// `Unprocessable`. An exhausted pool is a successful
/// [`QuizOutcome::Exhausted`].
pub async fn play_quiz<S>(store: &S, body: &Value) -> TriviaResult<(QuizRequest, QuizOutcome)>
where
    S: TriviaStore + ?Sized,
{
    let request = QuizRequest::from_value(body).map_err(|e| TriviaError::Unprocessable(e.to_string()))?;

    let candidates = match request.category.scope() {
        None => store.all_questions().await?,
        Some(id) => {
            if store.category(id).await?.is_none() {
                return Err(TriviaError::Unprocessable(format!("unknown quiz category {}", id)));
            }
            store.questions_in_category(&id.to_string()).await?
        }
    };

    let outcome = pick_question(candidates, &request.previous_questions, &mut rand::thread_rng());

    match outcome.question() {
        Some(q) => tracing::debug!(question_id = q.id, "quiz question selected"),
        None => tracing::debug!(
            asked = request.previous_questions.len(),
            "quiz pool exhausted"
        ),
    }

    Ok((request, outcome))
}
