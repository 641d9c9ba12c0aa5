//! recipes check command

use clap::Args;
use recipe_adapter::JsonFileRecipeRepository;
use recipe_domain::{RecipeId, RecipeRepository};

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// What `check` learned about a backing document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub recipe_count: usize,
    /// `None` when the largest stored id is `u64::MAX`
    pub next_id: Option<u64>,
}

impl CheckCommand {
    pub fn run(&self, config: &AppConfig) -> anyhow::Result<()> {
        let report = Self::inspect(config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let next_id = match report.next_id {
                Some(id) => id.to_string(),
                None => "exhausted".to_string(),
            };
            println!(
                "✓ {} is valid: {} recipes under '{}', next id {}",
                config.data_path.display(),
                report.recipe_count,
                config.collection_key,
                next_id
            );
        }
        Ok(())
    }

    /// Load the document exactly as the server would
    pub fn inspect(config: &AppConfig) -> anyhow::Result<CheckReport> {
        let repository =
            JsonFileRecipeRepository::open(&config.data_path, config.collection_key.as_str())?;
        let recipes = repository.list_all()?;

        Ok(CheckReport {
            recipe_count: recipes.len(),
            next_id: RecipeId::next_after(&recipes).map(|id| id.value()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_reports_count_and_next_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, include_str!("../../../../data/recipes.json")).unwrap();

        let config = AppConfig::default().with_overrides(Some(path), None, None);
        let report = CheckCommand::inspect(&config).unwrap();

        assert_eq!(report.recipe_count, 5);
        assert_eq!(report.next_id, Some(6));
    }

    #[test]
    fn test_inspect_reports_exhausted_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        let recipe = serde_json::json!({
            "id": u64::MAX,
            "name": "Last",
            "ingredients": [],
            "instructions": [],
            "prepTimeMinutes": 1,
            "cookTimeMinutes": 1,
            "servings": 1,
            "difficulty": "Easy",
            "cuisine": "Italian",
            "caloriesPerServing": 100,
            "tags": [],
            "userId": 1,
            "image": "https://example.com/last.webp",
            "rating": 4.0,
            "reviewCount": 0,
            "mealType": []
        });
        std::fs::write(&path, serde_json::json!({ "recipes": [recipe] }).to_string()).unwrap();

        let config = AppConfig::default().with_overrides(Some(path), None, None);
        let report = CheckCommand::inspect(&config).unwrap();

        assert_eq!(report.recipe_count, 1);
        assert_eq!(report.next_id, None);
    }

    #[test]
    fn test_inspect_fails_on_wrong_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, r#"{"products": []}"#).unwrap();

        let config = AppConfig::default().with_overrides(Some(path), None, None);
        assert!(CheckCommand::inspect(&config).is_err());
    }
}
