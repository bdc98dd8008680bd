//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the TriviaStore trait.

use super::{StorageError, traits::TriviaStore};
use crate::trivia::models::{Category, NewQuestion, Question};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL trivia storage backend.
pub struct PostgresTriviaStore {
    pool: PgPool,
}

impl PostgresTriviaStore {
    /// Create a new PostgreSQL storage backend.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PostgresTriviaStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE question ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn questions_in_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Question>, StorageError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, StorageError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .bind(new.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(new.into_question(id))
    }

    async fn delete_question(&self, id: i32) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::question_not_found(id));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn create_category(&self, category_type: String) -> Result<Category, StorageError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (type)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(&category_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Category { id, category_type })
    }
}
