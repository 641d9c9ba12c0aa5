//! Domain Models - The vocabulary of the recipe catalog

pub mod calorie_order;
pub mod recipe;
