use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use casedeck_core::{ApiClient, Config};

mod commands;
mod logging;
mod tui;

use commands::Command;

#[derive(Parser)]
#[command(name = "casedeck")]
#[command(about = "Terminal client for AI-generated test case management", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to ./casedeck.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Server base URL (overrides the configured one)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Run a one-shot command instead of the interactive UI
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    let client = Arc::new(ApiClient::new(config.server.base_url.clone()));

    match cli.command {
        None => tui::run(config, client).await,
        Some(command) => commands::run(command, &config, client.as_ref()).await,
    }
}
