//! workforce-api server binary

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use workforce_api::{Config, server, utils::logging::init_logging};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "workforce-api", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "WORKFORCE_CONFIG",
        default_value = "config/workforce.yaml"
    )]
    config: PathBuf,

    /// Apply database migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config).await?;
    init_logging(&config.logging)?;

    if cli.migrate_only {
        server::migrate(&config).await?;
        return Ok(());
    }

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, to keep newlines in config errors
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
