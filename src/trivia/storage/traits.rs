//! Storage trait definition for the trivia storage backends.

use super::StorageError;
use crate::trivia::models::{Category, NewQuestion, Question};

/// Storage backend trait for trivia database operations.
#[async_trait::async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Questions whose text contains the term (case-insensitive), ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;

    /// Questions belonging to one category, ordered by id
    async fn questions_in_category(&self, category_id: i32)
    -> Result<Vec<Question>, StorageError>;

    /// Insert a new question and return it with its assigned id
    async fn create_question(&self, new: NewQuestion) -> Result<Question, StorageError>;

    /// Delete a question; NotFound when the id does not exist
    async fn delete_question(&self, id: i32) -> Result<(), StorageError>;

    /// All categories ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>, StorageError>;

    /// Single category lookup
    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError>;

    /// Insert a new category and return it with its assigned id
    async fn create_category(&self, category_type: String) -> Result<Category, StorageError>;
}
