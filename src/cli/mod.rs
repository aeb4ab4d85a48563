use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// Mining Profitability Calculator
#[derive(Parser)]
#[command(name = "mining-profit-calculator")]
#[command(about = "Mining profitability calculator for BTC and DOGE")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate profitability, monthly forecast and block discovery times
    Calculate(commands::calculate::CalculateCommand),
    /// Show current exchange rates and network info
    Rates(commands::rates::RatesCommand),
    /// Convert farm cost and electricity rate between fiat currencies
    Convert(commands::convert::ConvertCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate(command) => command.run().await,
        Commands::Rates(command) => command.run().await,
        Commands::Convert(command) => command.run().await,
    }
}
