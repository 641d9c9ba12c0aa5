//! # Recipes Domain Layer
//!
//! Pure catalog logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Recipe entity & value objects                 ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Whether recipes live in a JSON file, in memory, or in a database,
//! and whether they are served over HTTP or a CLI, this crate doesn't change.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    calorie_order::CalorieOrder,
    recipe::{Recipe, RecipeDetails, RecipeId},
};

pub use repository::recipe_repository::{RecipeOperation, RecipeRepository, RepositoryError};
