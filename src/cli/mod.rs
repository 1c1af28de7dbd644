pub mod app;
pub mod commands;
pub mod context;
pub mod ui;

pub use app::{Cli, Commands};
pub use context::CommandContext;

use anyhow::Result;

pub async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => commands::run_command(ctx, args).await,
        Commands::Batch(args) => commands::batch_command(ctx, args).await,
        Commands::History(args) => commands::history_command(ctx, args).await,
        Commands::LegacySum(args) => commands::legacy_sum_command(ctx, args).await,
        Commands::Interactive(args) => commands::interactive_command(ctx, args).await,
        Commands::Settings(args) => commands::settings_command(ctx, args).await,
    }
}
