//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the catalog wants to persist recipes,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────────
//! trait RecipeRepository│  JsonFileRecipeRepository
//!   fn create()         │  InMemoryRecipeRepository
//!   fn find_by_id()     │
//! ```

pub mod recipe_repository;
