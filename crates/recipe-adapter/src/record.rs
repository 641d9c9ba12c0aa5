//! Wire types for recipes
//!
//! The backing document and the HTTP API share one JSON shape, with
//! camelCase keys. These types translate it to and from the domain model.

use recipe_domain::{Recipe, RecipeDetails, RecipeId};
use serde::{Deserialize, Serialize};

/// A stored recipe as it appears in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: i64,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub meal_type: Vec<String>,
}

/// Client-supplied recipe fields: a record without `id`.
///
/// An `id` key in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: i64,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub meal_type: Vec<String>,
}

impl From<RecipeInput> for RecipeDetails {
    fn from(input: RecipeInput) -> Self {
        RecipeDetails {
            name: input.name,
            ingredients: input.ingredients,
            instructions: input.instructions,
            prep_time_minutes: input.prep_time_minutes,
            cook_time_minutes: input.cook_time_minutes,
            servings: input.servings,
            difficulty: input.difficulty,
            cuisine: input.cuisine,
            calories_per_serving: input.calories_per_serving,
            tags: input.tags,
            user_id: input.user_id,
            image: input.image,
            rating: input.rating,
            review_count: input.review_count,
            meal_type: input.meal_type,
        }
    }
}

impl From<Recipe> for RecipeRecord {
    fn from(recipe: Recipe) -> Self {
        let id = recipe.id().value();
        let d = recipe.into_details();
        RecipeRecord {
            id,
            name: d.name,
            ingredients: d.ingredients,
            instructions: d.instructions,
            prep_time_minutes: d.prep_time_minutes,
            cook_time_minutes: d.cook_time_minutes,
            servings: d.servings,
            difficulty: d.difficulty,
            cuisine: d.cuisine,
            calories_per_serving: d.calories_per_serving,
            tags: d.tags,
            user_id: d.user_id,
            image: d.image,
            rating: d.rating,
            review_count: d.review_count,
            meal_type: d.meal_type,
        }
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        recipe.clone().into()
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        let details = RecipeDetails {
            name: record.name,
            ingredients: record.ingredients,
            instructions: record.instructions,
            prep_time_minutes: record.prep_time_minutes,
            cook_time_minutes: record.cook_time_minutes,
            servings: record.servings,
            difficulty: record.difficulty,
            cuisine: record.cuisine,
            calories_per_serving: record.calories_per_serving,
            tags: record.tags,
            user_id: record.user_id,
            image: record.image,
            rating: record.rating,
            review_count: record.review_count,
            meal_type: record.meal_type,
        };
        Recipe::new(RecipeId::new(record.id), details)
    }
}
