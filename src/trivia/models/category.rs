use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    // Serialized as "type" to match the public API; the column is also
    // named "type", hence the sqlx rename.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub category_type: String,
}
