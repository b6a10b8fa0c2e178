//! Domain models and wire-value coercion
//!
//! Request bodies from the game client are loosely typed (ids and ratings
//! arrive as either numbers or strings), so conversion into these types goes
//! through the helpers in [`validation`] and reports a [`ValidationError`]
//! instead of panicking.

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{parse_page, Paginated, Pagination, QUESTIONS_PER_PAGE};
pub use question::{CreateQuestionRequest, NewQuestion, Question};
pub use quiz::{QuizCategory, QuizRequest};
pub use validation::ValidationError;
