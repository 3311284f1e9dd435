use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Simulate smooth scroll animations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/glide/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a scroll over a generated document and print every frame
    Simulate(commands::simulate::SimulateArgs),
    /// List the built-in easing curves
    Easings,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!(log_level = %config.general.log_level, "Configuration loaded");

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(&config, args).await,
        Commands::Easings => commands::easings::run(&config),
        Commands::Config { init } => {
            let path = cli.config.unwrap_or_else(AppConfig::config_path);
            commands::config::run(&config, &path, init)
        }
    }
}
