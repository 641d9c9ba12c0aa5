//! Mutation rules shared by every repository implementation.
//!
//! Each function computes the collection that a mutation would produce,
//! without touching the current one. Callers decide when to commit, which
//! lets the file-backed repository persist first and commit only on success.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use recipe_domain::{Recipe, RecipeDetails, RecipeId, RecipeOperation, RepositoryError};

pub(crate) fn read_lock(
    recipes: &RwLock<Vec<Recipe>>,
) -> Result<RwLockReadGuard<'_, Vec<Recipe>>, RepositoryError> {
    recipes.read().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire read lock".to_string(),
    })
}

pub(crate) fn write_lock(
    recipes: &RwLock<Vec<Recipe>>,
) -> Result<RwLockWriteGuard<'_, Vec<Recipe>>, RepositoryError> {
    recipes.write().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire write lock".to_string(),
    })
}

pub(crate) fn first_with_id(recipes: &[Recipe], id: RecipeId) -> Option<usize> {
    recipes.iter().position(|r| r.id() == id)
}

/// Append a recipe with the next free id
pub(crate) fn with_created(
    recipes: &[Recipe],
    details: RecipeDetails,
) -> Result<(Vec<Recipe>, Recipe), RepositoryError> {
    let id = RecipeId::next_after(recipes).ok_or_else(|| RepositoryError::IdsExhausted {
        max: RecipeId::new(u64::MAX),
    })?;

    let recipe = Recipe::new(id, details);
    let mut next = recipes.to_vec();
    next.push(recipe.clone());
    Ok((next, recipe))
}

/// Replace the details of the first recipe with `id`
pub(crate) fn with_updated(
    recipes: &[Recipe],
    id: RecipeId,
    details: RecipeDetails,
) -> Result<(Vec<Recipe>, Recipe), RepositoryError> {
    let index = first_with_id(recipes, id)
        .ok_or_else(|| RepositoryError::not_found(id, RecipeOperation::Update))?;

    let mut next = recipes.to_vec();
    next[index].replace_details(details);
    let updated = next[index].clone();
    Ok((next, updated))
}

/// Drop the first recipe with `id`, keeping the order of the rest
pub(crate) fn without(
    recipes: &[Recipe],
    id: RecipeId,
) -> Result<(Vec<Recipe>, Recipe), RepositoryError> {
    let index = first_with_id(recipes, id)
        .ok_or_else(|| RepositoryError::not_found(id, RecipeOperation::Delete))?;

    let mut next = recipes.to_vec();
    let removed = next.remove(index);
    Ok((next, removed))
}
