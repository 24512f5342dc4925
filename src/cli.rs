use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "sp500-dashboard")]
#[command(about = "S&P 500 dashboard API server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
    /// Show provider configuration and roster status
    Status,
    /// Export the current stock table as CSV
    Export {
        /// Output file (default: sp500_stocks_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await,
        Commands::Status => commands::status::run(),
        Commands::Export { output } => commands::export::run(output).await,
    }
}
