//! # Recipes Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `record` - Wire shape of a recipe (camelCase JSON)
//! - `store/` - The backing JSON document on disk
//! - `repository/` - Implementations of `RecipeRepository`

pub mod record;
pub mod repository;
pub mod store;

pub use record::{RecipeInput, RecipeRecord};
pub use repository::in_memory::InMemoryRecipeRepository;
pub use repository::json_file::JsonFileRecipeRepository;
pub use store::json_document::{JsonDocumentStore, StoreError, DEFAULT_COLLECTION_KEY};
