pub mod summary;
pub mod times;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Print today's prayer windows")]
    Times,
    #[command(about = "Send the daily summary to the configured chat")]
    Summary,
    #[command(about = "Watch the clock and deliver prayer notifications")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Times => times::cmd().await,
            Commands::Summary => summary::cmd().await,
            Commands::Watch => watch::cmd().await,
        }
    }
}
