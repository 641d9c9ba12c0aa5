//! In-Memory Repository Implementation
//!
//! Same rules as the file-backed repository, without a backing document.
//! Useful for testing and development.

use std::sync::{Arc, RwLock};

use recipe_domain::{Recipe, RecipeDetails, RecipeId, RecipeRepository, RepositoryError};

use super::collection::{self, read_lock, write_lock};

/// In-memory Recipe Repository
///
/// Thread-safe implementation using RwLock. Clones share one collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, keeping its order and ids
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
        }
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn list_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(read_lock(&self.recipes)?.clone())
    }

    fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepositoryError> {
        let recipes = read_lock(&self.recipes)?;
        Ok(recipes.iter().find(|r| r.id() == id).cloned())
    }

    fn create(&self, details: RecipeDetails) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, created) = collection::with_created(&recipes, details)?;
        *recipes = next;
        Ok(created)
    }

    fn update(&self, id: RecipeId, details: RecipeDetails) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, updated) = collection::with_updated(&recipes, id, details)?;
        *recipes = next;
        Ok(updated)
    }

    fn delete(&self, id: RecipeId) -> Result<Recipe, RepositoryError> {
        let mut recipes = write_lock(&self.recipes)?;
        let (next, removed) = collection::without(&recipes, id)?;
        *recipes = next;
        Ok(removed)
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(read_lock(&self.recipes)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_domain::CalorieOrder;

    fn details(name: &str, calories: i64) -> RecipeDetails {
        RecipeDetails {
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            calories_per_serving: calories,
            ..RecipeDetails::default()
        }
    }

    #[test]
    fn test_create_on_empty_assigns_one() {
        let repo = InMemoryRecipeRepository::new();

        let created = repo.create(details("Risotto", 400)).unwrap();
        assert_eq!(created.id(), RecipeId::new(1));

        let second = repo.create(details("Gnocchi", 350)).unwrap();
        assert_eq!(second.id(), RecipeId::new(2));
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_create_continues_after_max_id() {
        let repo = InMemoryRecipeRepository::with_recipes(vec![
            Recipe::new(RecipeId::new(5), details("Lasagna", 600)),
            Recipe::new(RecipeId::new(2), details("Pesto", 250)),
        ]);

        let created = repo.create(details("Tiramisu", 450)).unwrap();
        assert_eq!(created.id(), RecipeId::new(6));
        assert_eq!(repo.get(RecipeId::new(6)).unwrap(), created);
    }

    #[test]
    fn test_create_after_u64_max_id_is_an_error() {
        let repo = InMemoryRecipeRepository::with_recipes(vec![Recipe::new(
            RecipeId::new(u64::MAX),
            details("Lasagna", 600),
        )]);

        let err = repo.create(details("Tiramisu", 450)).unwrap_err();

        assert!(matches!(err, RepositoryError::IdsExhausted { .. }));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.list_all().unwrap()[0].id(), RecipeId::new(u64::MAX));
    }

    #[test]
    fn test_clones_share_collection() {
        let repo = InMemoryRecipeRepository::new();
        let handle = repo.clone();

        handle.create(details("Focaccia", 200)).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.list_by_calories(CalorieOrder::Ascending).unwrap()[0]
                .details()
                .name,
            "Focaccia"
        );
    }
}
