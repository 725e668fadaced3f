//! Command-line front end for the catalog client
//!
//! Prints album records as pretty JSON on stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use librivox_catalog_lib::infrastructure::{ConfigManager, init_logging_with_config};
use librivox_catalog_lib::{AlbumListQuery, CatalogClient, CatalogService, Category, ProjectType, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "librivox-catalog", version, about = "Browse the LibriVox audiobook catalog")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, env = "LIBRIVOX_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List one page of albums
    Albums {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        #[arg(long, default_value_t = Category::default())]
        category: Category,

        #[arg(long = "type", default_value_t = ProjectType::default())]
        project_type: ProjectType,

        #[arg(long, default_value_t = SortOrder::default())]
        order: SortOrder,
    },
    /// Show one album with its episodes
    Album {
        /// Album identifier, e.g. "moby-dick-by-herman-melville"
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let mut config = manager.load_config().await?;

    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging_with_config(&config.logging)?;

    let client = CatalogClient::from_config(&config.catalog).context("Failed to create catalog client")?;
    let service = CatalogService::new(client);

    let output = match cli.command {
        Command::Albums {
            page,
            category,
            project_type,
            order,
        } => {
            let query = AlbumListQuery {
                page,
                category,
                project_type,
                order,
            };
            let albums = service.albums(query).await.inspect_err(|e| error!("Album list failed: {}", e))?;
            serde_json::to_string_pretty(&albums)?
        }
        Command::Album { id } => {
            let album = service.album(&id).await.inspect_err(|e| error!("Album '{}' failed: {}", id, e))?;
            serde_json::to_string_pretty(&album)?
        }
    };

    println!("{output}");
    Ok(())
}
