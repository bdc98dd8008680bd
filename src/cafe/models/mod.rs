// Models module - Drink records and their two public representations

pub mod drink;

pub use drink::{Drink, DrinkSummary, Ingredient, ShortIngredient};
