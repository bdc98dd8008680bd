use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ingredient of a drink recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// A menu drink with its full recipe (the "long" representation,
/// reserved for baristas).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Ingredient stripped down to what the public menu board shows.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: i32,
}

/// The "short" drink representation served on the public endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DrinkSummary {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

impl Drink {
    /// Public representation: ingredient names are withheld.
    pub fn short(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }
}
