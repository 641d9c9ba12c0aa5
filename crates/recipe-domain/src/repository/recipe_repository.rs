//! Recipe Repository - Abstract persistence for Recipes
//!
//! This trait defines what operations the catalog needs.
//! How they're implemented (JSON file, memory) is not our concern here.

use crate::model::calorie_order::CalorieOrder;
use crate::model::recipe::{Recipe, RecipeDetails, RecipeId};

/// Which lookup failed to find its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOperation {
    Read,
    Update,
    Delete,
}

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No recipe with this id
    NotFound {
        id: RecipeId,
        operation: RecipeOperation,
    },
    /// Failed to persist, or the collection is unusable
    PersistenceError { message: String },
    /// The largest stored id leaves no room for another one
    IdsExhausted { max: RecipeId },
}

impl RepositoryError {
    pub fn not_found(id: RecipeId, operation: RecipeOperation) -> Self {
        RepositoryError::NotFound { id, operation }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { operation, .. } => match operation {
                RecipeOperation::Read => write!(f, "Recipe not found, cannot be read"),
                RecipeOperation::Update => {
                    write!(f, "Recipe not found, it cannot be updated.")
                }
                RecipeOperation::Delete => {
                    write!(f, "Recipe not found, it cannot be deleted.")
                }
            },
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
            RepositoryError::IdsExhausted { max } => {
                write!(f, "No recipe id left after {}, cannot create", max)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Recipe Repository Trait
///
/// This is a PORT in hexagonal architecture.
///
/// Mutating methods take `&self`: implementations own their
/// synchronization and must serialize writers, so that id assignment
/// and persistence of one mutation never interleave with another.
///
/// The filter methods have default implementations that scan
/// `list_all()` in collection order.
pub trait RecipeRepository {
    /// Every recipe, in collection order
    fn list_all(&self) -> Result<Vec<Recipe>, RepositoryError>;

    /// First recipe with this id
    fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RepositoryError>;

    /// Assign the next id, append, persist
    fn create(&self, details: RecipeDetails) -> Result<Recipe, RepositoryError>;

    /// Overwrite every non-id field of an existing recipe, persist
    fn update(&self, id: RecipeId, details: RecipeDetails) -> Result<Recipe, RepositoryError>;

    /// Remove a recipe, persist, and hand back what was removed
    fn delete(&self, id: RecipeId) -> Result<Recipe, RepositoryError>;

    /// Like `find_by_id`, but absence is an error
    fn get(&self, id: RecipeId) -> Result<Recipe, RepositoryError> {
        self.find_by_id(id)?
            .ok_or_else(|| RepositoryError::not_found(id, RecipeOperation::Read))
    }

    fn find_by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(retain_matching(self.list_all()?, |r| r.details().cuisine == cuisine))
    }

    fn find_by_difficulty(&self, difficulty: &str) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(retain_matching(self.list_all()?, |r| r.details().difficulty == difficulty))
    }

    fn find_by_prep_time(&self, minutes: i64) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(retain_matching(self.list_all()?, |r| r.details().prep_time_minutes == minutes))
    }

    fn find_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(retain_matching(self.list_all()?, |r| r.has_ingredient(ingredient)))
    }

    fn find_by_meal_type(&self, meal_type: &str) -> Result<Vec<Recipe>, RepositoryError> {
        Ok(retain_matching(self.list_all()?, |r| r.has_meal_type(meal_type)))
    }

    /// All recipes arranged by calories per serving
    fn list_by_calories(&self, order: CalorieOrder) -> Result<Vec<Recipe>, RepositoryError> {
        let mut recipes = self.list_all()?;
        order.arrange(&mut recipes);
        Ok(recipes)
    }

    /// Count all recipes
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list_all()?.len())
    }
}

fn retain_matching(
    recipes: Vec<Recipe>,
    predicate: impl Fn(&Recipe) -> bool,
) -> Vec<Recipe> {
    recipes.into_iter().filter(|r| predicate(r)).collect()
}
