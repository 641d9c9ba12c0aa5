//! recipes serve command

use clap::Args;
use recipe_adapter::JsonFileRecipeRepository;
use tracing::info;

use crate::config::AppConfig;
use crate::routes::AppState;
use crate::server;

#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeCommand {
    pub async fn run(&self, config: AppConfig) -> anyhow::Result<()> {
        let config = config.with_overrides(None, None, self.bind.clone());

        info!("Loading recipes from {}", config.data_path.display());
        let repository =
            JsonFileRecipeRepository::open(&config.data_path, config.collection_key.as_str())?;

        server::serve(&config.bind, AppState::new(repository)).await
    }
}
