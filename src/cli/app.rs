use super::commands::{
    BatchCommands, HistoryCommands, InteractiveCommands, LegacySumCommands, RunCommands, SettingsCommands,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "A CLI client for the batch calculator service")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Override the service base URL for this run
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate one operation immediately
    Run(RunCommands),
    /// Queue several operations and send them as one batch
    Batch(BatchCommands),
    /// Show the calculation history
    History(HistoryCommands),
    /// Add two numbers through the legacy sum endpoint
    LegacySum(LegacySumCommands),
    /// Launch the interactive calculator
    Interactive(InteractiveCommands),
    /// Application settings management
    Settings(SettingsCommands),
}
