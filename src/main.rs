use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// nutriplan - daily meal planning with calorie tracking
#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(about = "Daily meal planning with calorie tracking", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage the recipe catalogue
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Import recipes from a JSON file
    Import {
        /// JSON array of recipes with ingredients and steps
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nutriplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutriplan::observability::init_observability(
        "nutriplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => nutriplan::cli::serve(config, host, port).await,
        Commands::Migrate => nutriplan::cli::migrate(config).await,
        Commands::Reset => nutriplan::cli::reset(config).await,
        Commands::Recipe {
            command: RecipeCommands::Import { file },
        } => nutriplan::cli::import_recipes(config, file).await,
    }
}
