//! In-memory storage backend.
//!
//! Used when the API runs without `DATABASE_URL` and by the test suite.
//! Rows live in ordered maps guarded by an async RwLock, with ids handed
//! out by a monotonically increasing counter per table.

use super::{StorageError, traits::TriviaStore};
use crate::trivia::models::{Category, NewQuestion, Question};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct TriviaTables {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    next_question_id: i32,
    next_category_id: i32,
}

/// In-memory trivia storage backend.
pub struct MemoryTriviaStore {
    tables: RwLock<TriviaTables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(TriviaTables::default()),
        }
    }
}

impl Default for MemoryTriviaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn questions_in_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Question>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, StorageError> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let question = new.into_question(tables.next_question_id);
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        tables
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::question_not_found(id))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn create_category(&self, category_type: String) -> Result<Category, StorageError> {
        let mut tables = self.tables.write().await;
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            category_type,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }
}
