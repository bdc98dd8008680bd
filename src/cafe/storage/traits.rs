//! Storage trait definition for the cafe storage backends.

use super::StorageError;
use crate::cafe::models::{Drink, Ingredient};

/// Storage backend trait for drink operations.
#[async_trait::async_trait]
pub trait CafeStore: Send + Sync {
    /// All drinks ordered by id
    async fn list_drinks(&self) -> Result<Vec<Drink>, StorageError>;

    /// Single drink lookup
    async fn get_drink(&self, id: i32) -> Result<Option<Drink>, StorageError>;

    /// Insert a new drink; Conflict when the title is taken
    async fn create_drink(
        &self,
        title: String,
        recipe: Vec<Ingredient>,
    ) -> Result<Drink, StorageError>;

    /// Partial update; NotFound when the id does not exist
    async fn update_drink(
        &self,
        id: i32,
        title: Option<String>,
        recipe: Option<Vec<Ingredient>>,
    ) -> Result<Drink, StorageError>;

    /// Delete a drink; NotFound when the id does not exist
    async fn delete_drink(&self, id: i32) -> Result<(), StorageError>;
}
