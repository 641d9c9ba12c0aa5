//! Recipes - CRUD HTTP API over a JSON recipe collection
//!
//! Usage:
//!   recipes                         - Serve the API (same as `serve`)
//!   recipes serve [--bind ADDR]     - Serve the API
//!   recipes check [--json]          - Validate the backing document
//!
//! Global options:
//!   --config FILE, --data FILE, --collection-key KEY

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recipe_app::commands::{CheckCommand, ServeCommand};
use recipe_app::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "Recipes - CRUD HTTP API over a JSON recipe collection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backing JSON document (overrides the config file)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Top-level key holding the recipe array (overrides the config file)
    #[arg(long, global = true)]
    collection_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeCommand),
    /// Load the backing document and report on it
    Check(CheckCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.data, cli.collection_key, None);

    match cli.command {
        Some(Commands::Serve(cmd)) => cmd.run(config).await,
        Some(Commands::Check(cmd)) => cmd.run(&config),
        None => ServeCommand::default().run(config).await,
    }
}
