use anyhow::Result;
use calc_cli::cli::{self, Cli, CommandContext};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("calc-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let args = Cli::parse();
    info!("Starting calc-cli");

    let ctx = CommandContext::load(args.config, args.base_url)?;
    info!("Using calculator service at {}", ctx.config.server.base_url);

    cli::dispatch(&ctx, args.command).await
}
