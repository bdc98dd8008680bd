//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the CafeStore trait.
//! Recipes are persisted as JSON text in the `recipe` column.

use super::{StorageError, traits::CafeStore};
use crate::cafe::models::{Drink, Ingredient};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL cafe storage backend.
pub struct PostgresCafeStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct DrinkRow {
    id: i32,
    title: String,
    recipe: String,
}

impl DrinkRow {
    fn into_drink(self) -> Result<Drink, StorageError> {
        let recipe: Vec<Ingredient> = serde_json::from_str(&self.recipe)
            .map_err(|e| StorageError::Data(format!("drink {}: {}", self.id, e)))?;
        Ok(Drink {
            id: self.id,
            title: self.title,
            recipe,
        })
    }
}

fn recipe_to_json(recipe: &[Ingredient]) -> Result<String, StorageError> {
    serde_json::to_string(recipe).map_err(|e| StorageError::Data(e.to_string()))
}

impl PostgresCafeStore {
    /// Create a new PostgreSQL storage backend.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeStore for PostgresCafeStore {
    async fn list_drinks(&self) -> Result<Vec<Drink>, StorageError> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.into_iter().map(DrinkRow::into_drink).collect()
    }

    async fn get_drink(&self, id: i32) -> Result<Option<Drink>, StorageError> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.map(DrinkRow::into_drink).transpose()
    }

    async fn create_drink(
        &self,
        title: String,
        recipe: Vec<Ingredient>,
    ) -> Result<Drink, StorageError> {
        let recipe_json = recipe_to_json(&recipe)?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&title)
        .bind(&recipe_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StorageError::Conflict(title.clone())
            }
            _ => StorageError::Connection(e.to_string()),
        })?;

        Ok(Drink { id, title, recipe })
    }

    async fn update_drink(
        &self,
        id: i32,
        title: Option<String>,
        recipe: Option<Vec<Ingredient>>,
    ) -> Result<Drink, StorageError> {
        let current = self
            .get_drink(id)
            .await?
            .ok_or(StorageError::NotFound(id))?;

        let title = title.unwrap_or(current.title);
        let recipe = recipe.unwrap_or(current.recipe);
        let recipe_json = recipe_to_json(&recipe)?;

        sqlx::query(
            r#"
            UPDATE drinks
            SET title = $1, recipe = $2
            WHERE id = $3
            "#,
        )
        .bind(&title)
        .bind(&recipe_json)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StorageError::Conflict(title.clone())
            }
            _ => StorageError::Connection(e.to_string()),
        })?;

        Ok(Drink { id, title, recipe })
    }

    async fn delete_drink(&self, id: i32) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}
