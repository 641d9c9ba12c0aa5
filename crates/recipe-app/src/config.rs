//! Configuration for the recipes service

use std::path::{Path, PathBuf};

use recipe_adapter::DEFAULT_COLLECTION_KEY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Service configuration.
///
/// Missing keys fall back to the defaults, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Backing JSON document
    pub data_path: PathBuf,

    /// Top-level key holding the recipe array
    pub collection_key: String,

    /// Socket address for the HTTP server
    pub bind: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/recipes.json"),
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line values on top of this config
    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        collection_key: Option<String>,
        bind: Option<String>,
    ) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        if let Some(collection_key) = collection_key {
            self.collection_key = collection_key;
        }
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }
}
