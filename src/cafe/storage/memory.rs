//! In-memory storage backend.
//!
//! Used when the API runs without `DATABASE_URL` and by the test suite.

use super::{StorageError, traits::CafeStore};
use crate::cafe::models::{Drink, Ingredient};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct DrinkTable {
    drinks: BTreeMap<i32, Drink>,
    next_id: i32,
}

/// In-memory cafe storage backend.
pub struct MemoryCafeStore {
    table: RwLock<DrinkTable>,
}

impl MemoryCafeStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(DrinkTable::default()),
        }
    }
}

impl Default for MemoryCafeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CafeStore for MemoryCafeStore {
    async fn list_drinks(&self) -> Result<Vec<Drink>, StorageError> {
        let table = self.table.read().await;
        Ok(table.drinks.values().cloned().collect())
    }

    async fn get_drink(&self, id: i32) -> Result<Option<Drink>, StorageError> {
        let table = self.table.read().await;
        Ok(table.drinks.get(&id).cloned())
    }

    async fn create_drink(
        &self,
        title: String,
        recipe: Vec<Ingredient>,
    ) -> Result<Drink, StorageError> {
        let mut table = self.table.write().await;
        if table.drinks.values().any(|d| d.title == title) {
            return Err(StorageError::Conflict(title));
        }

        table.next_id += 1;
        let drink = Drink {
            id: table.next_id,
            title,
            recipe,
        };
        table.drinks.insert(drink.id, drink.clone());
        Ok(drink)
    }

    async fn update_drink(
        &self,
        id: i32,
        title: Option<String>,
        recipe: Option<Vec<Ingredient>>,
    ) -> Result<Drink, StorageError> {
        let mut table = self.table.write().await;

        if let Some(new_title) = &title {
            let taken = table
                .drinks
                .values()
                .any(|d| d.id != id && d.title == *new_title);
            if taken {
                return Err(StorageError::Conflict(new_title.clone()));
            }
        }

        let drink = table
            .drinks
            .get_mut(&id)
            .ok_or(StorageError::NotFound(id))?;

        if let Some(new_title) = title {
            drink.title = new_title;
        }
        if let Some(new_recipe) = recipe {
            drink.recipe = new_recipe;
        }

        Ok(drink.clone())
    }

    async fn delete_drink(&self, id: i32) -> Result<(), StorageError> {
        let mut table = self.table.write().await;
        table
            .drinks
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }
}
