//! Recipe - The single entity of the catalog
//!
//! A Recipe is an Entity: the `RecipeId` is assigned once by the
//! repository and never changes. Everything else lives in
//! `RecipeDetails`, which is what clients send on create and update.

/// Unique identifier for a Recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(u64);

impl RecipeId {
    pub const FIRST: RecipeId = RecipeId(1);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Next free id: one past the largest id in `existing`, or `FIRST` when empty.
    ///
    /// Ids freed by deleting anything other than the current maximum are
    /// never handed out again. `None` once the largest id is `u64::MAX`.
    pub fn next_after<'a>(existing: impl IntoIterator<Item = &'a Recipe>) -> Option<Self> {
        match existing.into_iter().map(|r| r.id().0).max() {
            Some(max) => max.checked_add(1).map(Self),
            None => Some(Self::FIRST),
        }
    }
}

impl core::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Every client-editable field of a recipe.
///
/// All fields are required; an update replaces the whole value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDetails {
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

/// A stored recipe: identity plus details
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    id: RecipeId,
    details: RecipeDetails,
}

impl Recipe {
    pub fn new(id: RecipeId, details: RecipeDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn details(&self) -> &RecipeDetails {
        &self.details
    }

    pub fn into_details(self) -> RecipeDetails {
        self.details
    }

    /// Overwrite every field except the id
    pub fn replace_details(&mut self, details: RecipeDetails) {
        self.details = details;
    }

    // ========== Field matching ==========

    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.details.ingredients.iter().any(|i| i == ingredient)
    }

    pub fn has_meal_type(&self, meal_type: &str) -> bool {
        self.details.meal_type.iter().any(|m| m == meal_type)
    }

    pub fn calories_per_serving(&self) -> i64 {
        self.details.calories_per_serving
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn details(name: &str, cuisine: &str, calories: i64) -> RecipeDetails {
        RecipeDetails {
            name: name.to_string(),
            ingredients: vec!["salt".to_string(), "olive oil".to_string()],
            instructions: vec!["Mix.".to_string(), "Cook.".to_string()],
            prep_time_minutes: 15,
            cook_time_minutes: 20,
            servings: 4,
            difficulty: "Easy".to_string(),
            cuisine: cuisine.to_string(),
            calories_per_serving: calories,
            tags: vec!["dinner".to_string()],
            user_id: 7,
            image: "https://example.com/recipe.webp".to_string(),
            rating: 4.5,
            review_count: 12,
            meal_type: vec!["Dinner".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::details;
    use super::*;

    #[test]
    fn test_next_id_on_empty_collection() {
        let recipes: Vec<Recipe> = Vec::new();
        assert_eq!(RecipeId::next_after(&recipes), Some(RecipeId::new(1)));
    }

    #[test]
    fn test_next_id_uses_maximum_not_length() {
        let recipes = vec![
            Recipe::new(RecipeId::new(5), details("Pizza", "Italian", 300)),
            Recipe::new(RecipeId::new(2), details("Tacos", "Mexican", 250)),
        ];
        assert_eq!(RecipeId::next_after(&recipes), Some(RecipeId::new(6)));
    }

    #[test]
    fn test_next_id_is_none_at_u64_max() {
        let recipes = vec![
            Recipe::new(RecipeId::new(1), details("Pizza", "Italian", 300)),
            Recipe::new(RecipeId::new(u64::MAX), details("Tacos", "Mexican", 250)),
        ];
        assert_eq!(RecipeId::next_after(&recipes), None);

        let below = vec![Recipe::new(
            RecipeId::new(u64::MAX - 1),
            details("Ramen", "Japanese", 450),
        )];
        assert_eq!(RecipeId::next_after(&below), Some(RecipeId::new(u64::MAX)));
    }

    #[test]
    fn test_replace_details_keeps_id() {
        let mut recipe = Recipe::new(RecipeId::new(3), details("Pizza", "Italian", 300));
        recipe.replace_details(details("Ramen", "Japanese", 450));

        assert_eq!(recipe.id(), RecipeId::new(3));
        assert_eq!(recipe.details().name, "Ramen");
        assert_eq!(recipe.calories_per_serving(), 450);
    }

    #[test]
    fn test_sequence_matching_is_exact() {
        let recipe = Recipe::new(RecipeId::new(1), details("Pizza", "Italian", 300));

        assert!(recipe.has_ingredient("olive oil"));
        assert!(!recipe.has_ingredient("olive"));
        assert!(!recipe.has_ingredient("Salt"));
        assert!(recipe.has_meal_type("Dinner"));
        assert!(!recipe.has_meal_type("dinner"));
    }
}
