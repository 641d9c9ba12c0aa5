//! JSON-File Repository Implementation
//!
//! Holds the collection in memory for the process lifetime and rewrites
//! the backing document after every mutation.
//!
//! Mutations hold the write lock while they compute, save and commit,
//! so two writers can never pick the same id or interleave their file
//! writes. The new collection is saved before it replaces the old one:
//! if the save fails, memory still matches disk.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use recipe_domain::{Recipe, RecipeDetails, RecipeId, RecipeRepository, RepositoryError};
use tracing::{error, info, warn};

use super::collection::{self, read_lock, write_lock};
use crate::store::json_document::{JsonDocumentStore, StoreError};

/// File-backed Recipe Repository
#[derive(Debug, Clone)]
pub struct JsonFileRecipeRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
    store: JsonDocumentStore,
}

impl JsonFileRecipeRepository {
    /// Load the collection under `collection_key` from the document at `path`
    pub fn open(
        path: impl Into<PathBuf>,
        collection_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        Self::from_store(JsonDocumentStore::new(path, collection_key))
    }

    pub fn from_store(store: JsonDocumentStore) -> Result<Self, StoreError> {
        let recipes = store.load()?;

        let mut ids: Vec<u64> = recipes.iter().map(|r| r.id().value()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != recipes.len() {
            warn!(
                "{} contains duplicate recipe ids; lookups use the first match",
                store.path().display()
            );
        }

        info!(
            "Loaded {} recipes from {} (key '{}')",
            recipes.len(),
            store.path().display(),
            store.collection_key()
        );

        Ok(Self {
            recipes: Arc::new(RwLock::new(recipes)),
            store,
        })
    }

    pub fn store(&self) -> &JsonDocumentStore {
        &self.store
    }

    fn persist(&self, next: &[Recipe]) -> Result<(), RepositoryError> {
        self.store.save(next).map_err(|e| {
            error!("Failed to persist recipes, keeping previous state: {}", e);
            RepositoryError::PersistenceError {
                message: e.to_string(),
            }
        })
    }
}

impl RecipeRepository for JsonFileRecipeRepository {
    fn list_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(read_lock(&self.recipes)?.clone())
    }

    fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepositoryError> {
        let recipes = read_lock(&self.recipes)?;
        Ok(collection::first_with_id(&recipes, id).map(|i| recipes[i].clone()))
    }

    fn create(&self, details: RecipeDetails) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, created) = collection::with_created(&recipes, details)?;
        self.persist(&next)?;
        *recipes = next;

        info!("Created recipe {}", created.id());
        Ok(created)
    }

    fn update(&self, id: RecipeId, details: RecipeDetails) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, updated) = collection::with_updated(&recipes, id, details)?;
        self.persist(&next)?;
        *recipes = next;

        info!("Updated recipe {}", id);
        Ok(updated)
    }

    fn delete(&self, id: RecipeId) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, removed) = collection::without(&recipes, id)?;
        self.persist(&next)?;
        *recipes = next;

        info!("Deleted recipe {}", id);
        Ok(removed)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(read_lock(&self.recipes)?.len())
    }
}
