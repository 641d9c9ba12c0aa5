//! # Recipes Application
//!
//! HTTP API, CLI and dependency wiring for the recipe catalog.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  recipes (binary)                                               │
//! │    ├── Loads: AppConfig (file + CLI overrides)                  │
//! │    ├── Creates: JsonFileRecipeRepository (adapter)              │
//! │    └── Serves: axum router over the RecipeRepository port       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::{router, AppState};
