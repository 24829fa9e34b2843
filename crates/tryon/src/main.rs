//! Tryon CLI - cross-brand size translation and virtual try-on backend.
//!
//! Serves the HTTP API used by the storefront demo, and exposes the size
//! table and garment inventory for one-off checks from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Start the API server
//! tryon serve --port 8000
//!
//! # Translate a size
//! tryon resolve t-shirts male nike M adidas
//!
//! # Check the size table for one-way entries
//! tryon sizes audit
//!
//! # View configuration
//! tryon config show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tryon_core::Config;

mod cli;
mod logging;
mod server;

/// Tryon - cross-brand size translation and virtual try-on backend.
#[derive(Parser, Debug)]
#[command(name = "tryon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "TRYON_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server
    Serve(cli::serve::ServeArgs),

    /// Translate a size from one brand to another
    Resolve(cli::resolve::ResolveArgs),

    /// Inspect the size conversion table
    Sizes(cli::sizes::SizesArgs),

    /// Browse the garment inventory
    Inventory(cli::inventory::InventoryArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `tryon config path`."
                );
                Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Tryon v{}", tryon_core::VERSION);

    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Resolve(args) => cli::resolve::execute(args, &config),
        Commands::Sizes(args) => cli::sizes::execute(args),
        Commands::Inventory(args) => cli::inventory::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args, &config, cli.config.as_deref()),
    }
}
