//! Catalog command-line front end.
//!
//! Resolves configuration from `CATALOG_*` environment variables, lets
//! flags override it, starts logging when a log directory is configured,
//! then runs one subcommand.

use catalog_core::{init_logging_from_config, CatalogConfig};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
#[command(about = "Inventory catalog of categories and items", long_about = None)]
struct Cli {
    /// SQLite database file (overrides CATALOG_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (overrides CATALOG_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides CATALOG_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Insert the sample categories and items
    Seed,
    /// List categories sorted by name
    Categories,
    /// List items sorted by name
    Items,
    /// Print item and category counts
    Summary,
    /// Run one catalog route and print the resulting page as JSON
    Request(commands::request::RequestArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Categories => "categories",
            Self::Items => "items",
            Self::Summary => "summary",
            Self::Request(_) => "request",
        }
    }
}

impl Cli {
    fn config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::from_env();
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let command = cli.command.name();
    info!("event=cli_command module=cli status=start command={command}");
    let result = match cli.command {
        Commands::Seed => commands::seed::execute(&config),
        Commands::Categories => commands::list::categories(&config),
        Commands::Items => commands::list::items(&config),
        Commands::Summary => commands::list::summary(&config),
        Commands::Request(args) => commands::request::execute(&config, args),
    };

    if let Err(err) = result {
        error!("event=cli_command module=cli status=error command={command} error={err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
