//! JsonDocumentStore - A recipe collection under one key of a JSON object
//!
//! ```json
//! { "recipes": [ { "id": 1, "name": "...", ... } ] }
//! ```

use std::path::{Path, PathBuf};

use recipe_domain::Recipe;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::RecipeRecord;

pub const DEFAULT_COLLECTION_KEY: &str = "recipes";

/// Errors from reading or writing the backing document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn format(path: &Path, reason: impl Into<String>) -> Self {
        StoreError::Format {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Reads and rewrites the backing document
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    path: PathBuf,
    collection_key: String,
}

impl JsonDocumentStore {
    pub fn new(path: impl Into<PathBuf>, collection_key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            collection_key: collection_key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    /// Load the collection, in document order
    pub fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        let document: Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::format(&self.path, format!("invalid JSON: {}", e)))?;

        let Value::Object(mut document) = document else {
            return Err(StoreError::format(
                &self.path,
                "top-level value is not an object",
            ));
        };

        let collection = document.remove(&self.collection_key).ok_or_else(|| {
            StoreError::format(
                &self.path,
                format!("missing collection key '{}'", self.collection_key),
            )
        })?;

        if !collection.is_array() {
            return Err(StoreError::format(
                &self.path,
                format!("'{}' is not an array", self.collection_key),
            ));
        }

        let records: Vec<RecipeRecord> = serde_json::from_value(collection)
            .map_err(|e| StoreError::format(&self.path, format!("invalid recipe: {}", e)))?;

        Ok(records.into_iter().map(Recipe::from).collect())
    }

    /// Replace the collection on disk.
    ///
    /// Other top-level keys already in the document are kept. The new
    /// document is written to a sibling file named with an extra `.tmp`
    /// suffix and renamed over the target, so readers see either the old
    /// or the new content.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let records: Vec<RecipeRecord> = recipes.iter().map(RecipeRecord::from).collect();

        let mut document = self.existing_document();
        document.insert(self.collection_key.clone(), serde_json::to_value(records)?);

        let bytes = serde_json::to_vec_pretty(&Value::Object(document))?;

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, bytes).map_err(|e| StoreError::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(
            "Saved {} recipes to {}",
            recipes.len(),
            self.path.display()
        );
        Ok(())
    }

    /// `recipes.json` -> `recipes.json.tmp`; never equal to the target
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn existing_document(&self) -> Map<String, Value> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };

        match serde_json::from_str(&content) {
            Ok(Value::Object(document)) => document,
            _ => {
                warn!(
                    "Existing document at {} is not a JSON object, rewriting it",
                    self.path.display()
                );
                Map::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_domain::{RecipeDetails, RecipeId};
    use tempfile::TempDir;

    fn recipe(id: u64, name: &str, calories: i64) -> Recipe {
        Recipe::new(
            RecipeId::new(id),
            RecipeDetails {
                name: name.to_string(),
                ingredients: vec!["Rice".to_string(), "Nori".to_string()],
                instructions: vec!["Roll.".to_string()],
                prep_time_minutes: 30,
                cook_time_minutes: 0,
                servings: 2,
                difficulty: "Medium".to_string(),
                cuisine: "Japanese".to_string(),
                calories_per_serving: calories,
                tags: vec!["Sushi".to_string()],
                user_id: 12,
                image: "https://example.com/sushi.webp".to_string(),
                rating: 4.25,
                review_count: 3,
                meal_type: vec!["Lunch".to_string(), "Dinner".to_string()],
            },
        )
    }

    fn store_with(dir: &TempDir, content: &str) -> JsonDocumentStore {
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, content).unwrap();
        JsonDocumentStore::new(path, DEFAULT_COLLECTION_KEY)
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, r#"{"recipes": []}"#);

        let recipes = vec![recipe(3, "Maki", 200), recipe(1, "Nigiri", 150)];
        store.save(&recipes).unwrap();

        assert_eq!(store.load().unwrap(), recipes);
    }

    #[test]
    fn test_save_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path().join("fresh.json"), "dishes");

        store.save(&[recipe(1, "Maki", 200)]).unwrap();

        let raw: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["dishes"][0]["name"], "Maki");
        assert!(!dir.path().join("fresh.json.tmp").exists());
    }

    #[test]
    fn test_save_to_file_already_ending_in_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.tmp");
        std::fs::write(&path, r#"{"recipes": []}"#).unwrap();
        let store = JsonDocumentStore::new(&path, DEFAULT_COLLECTION_KEY);

        store.save(&[recipe(1, "Maki", 200)]).unwrap();

        assert_eq!(store.tmp_path(), dir.path().join("recipes.tmp.tmp"));
        assert_eq!(store.load().unwrap().len(), 1);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_negative_integers_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, r#"{"recipes": []}"#);

        let mut sentinel = recipe(1, "Maki", -5);
        let mut details = sentinel.details().clone();
        details.cook_time_minutes = -1;
        details.user_id = -1;
        sentinel.replace_details(details);

        store.save(&[sentinel.clone()]).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, vec![sentinel]);
        assert_eq!(loaded[0].details().cook_time_minutes, -1);
        assert_eq!(loaded[0].calories_per_serving(), -5);
    }

    #[test]
    fn test_save_keeps_other_top_level_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, r#"{"recipes": [], "version": 2}"#);

        store.save(&[recipe(1, "Maki", 200)]).unwrap();

        let raw: Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], 2);
        assert_eq!(raw["recipes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::new(dir.path().join("absent.json"), "recipes");

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_load_rejects_malformed_documents() {
        let dir = TempDir::new().unwrap();

        for content in [
            "not json",
            r#"["recipes"]"#,
            r#"{"products": []}"#,
            r#"{"recipes": {"id": 1}}"#,
            r#"{"recipes": [{"id": 1, "name": "Half a recipe"}]}"#,
        ] {
            let store = store_with(&dir, content);
            assert!(
                matches!(store.load(), Err(StoreError::Format { .. })),
                "expected format error for {content}"
            );
        }
    }

    #[test]
    fn test_load_uses_configured_key() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, r#"{"recipes": [], "archived": []}"#);
        let archived = JsonDocumentStore::new(store.path(), "archived");

        archived.save(&[recipe(9, "Temaki", 180)]).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(archived.load().unwrap()[0].id(), RecipeId::new(9));
    }
}
