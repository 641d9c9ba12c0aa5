//! HTTP routes
//!
//! Thin translation between JSON over HTTP and `RecipeRepository`.
//! Every repository call runs on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use recipe_adapter::{RecipeInput, RecipeRecord};
use recipe_domain::{
    CalorieOrder, Recipe, RecipeDetails, RecipeId, RecipeRepository, RepositoryError,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

pub const WELCOME_MESSAGE: &str = "Welcome to the recipe API. With this API you can create, read, update and delete recipes and also filter them at your convenience.";

pub type SharedRepository = Arc<dyn RecipeRepository + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub repository: SharedRepository,
}

impl AppState {
    pub fn new(repository: impl RecipeRepository + Send + Sync + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(read_recipe).patch(update_recipe).delete(delete_recipe),
        )
        .route("/recipes/cuisine/:cuisine", get(recipes_by_cuisine))
        .route("/recipes/difficulty/:difficulty", get(recipes_by_difficulty))
        .route("/recipes/ingredient/:ingredient", get(recipes_by_ingredient))
        .route("/recipes/prep-time/:minutes", get(recipes_by_prep_time))
        .route("/recipes/meal-type/:meal_type", get(recipes_by_meal_type))
        .route("/recipes/calories/:order", get(recipes_by_calories))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

type RecipeList = Result<Json<Vec<RecipeRecord>>, AppError>;
type SingleRecipe = Result<Json<RecipeRecord>, AppError>;

/// Run a repository call on the blocking pool.
///
/// Repositories guard their collection with a std `RwLock` and writers
/// hold it across a file rewrite, so neither reads nor writes may wait
/// for it on an async worker.
async fn blocking<T, F>(state: AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn RecipeRepository) -> Result<T, RepositoryError> + Send + 'static,
{
    let value = tokio::task::spawn_blocking(move || op(state.repository.as_ref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(value)
}

async fn many<F>(state: AppState, op: F) -> RecipeList
where
    F: FnOnce(&dyn RecipeRepository) -> Result<Vec<Recipe>, RepositoryError> + Send + 'static,
{
    let recipes = blocking(state, op).await?;
    Ok(Json(recipes.into_iter().map(RecipeRecord::from).collect()))
}

async fn one<F>(state: AppState, op: F) -> SingleRecipe
where
    F: FnOnce(&dyn RecipeRepository) -> Result<Recipe, RepositoryError> + Send + 'static,
{
    Ok(Json(blocking(state, op).await?.into()))
}

async fn home() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn list_recipes(State(state): State<AppState>) -> RecipeList {
    many(state, |repo| repo.list_all()).await
}

async fn read_recipe(State(state): State<AppState>, Path(id): Path<u64>) -> SingleRecipe {
    one(state, move |repo| repo.get(RecipeId::new(id))).await
}

async fn create_recipe(State(state): State<AppState>, Json(input): Json<RecipeInput>) -> SingleRecipe {
    let details = RecipeDetails::from(input);
    one(state, move |repo| repo.create(details)).await
}

async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<RecipeInput>,
) -> SingleRecipe {
    let details = RecipeDetails::from(input);
    one(state, move |repo| repo.update(RecipeId::new(id), details)).await
}

async fn delete_recipe(State(state): State<AppState>, Path(id): Path<u64>) -> SingleRecipe {
    one(state, move |repo| repo.delete(RecipeId::new(id))).await
}

async fn recipes_by_cuisine(State(state): State<AppState>, Path(cuisine): Path<String>) -> RecipeList {
    many(state, move |repo| repo.find_by_cuisine(&cuisine)).await
}

async fn recipes_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> RecipeList {
    many(state, move |repo| repo.find_by_difficulty(&difficulty)).await
}

async fn recipes_by_ingredient(
    State(state): State<AppState>,
    Path(ingredient): Path<String>,
) -> RecipeList {
    many(state, move |repo| repo.find_by_ingredient(&ingredient)).await
}

async fn recipes_by_prep_time(State(state): State<AppState>, Path(minutes): Path<i64>) -> RecipeList {
    many(state, move |repo| repo.find_by_prep_time(minutes)).await
}

async fn recipes_by_meal_type(
    State(state): State<AppState>,
    Path(meal_type): Path<String>,
) -> RecipeList {
    many(state, move |repo| repo.find_by_meal_type(&meal_type)).await
}

async fn recipes_by_calories(State(state): State<AppState>, Path(order): Path<String>) -> RecipeList {
    let order = CalorieOrder::from_token(&order);
    many(state, move |repo| repo.list_by_calories(order)).await
}
