use crate::api::Operator;
use crate::calc::Msg;
use crate::cli::context::CommandContext;
use crate::cli::ui::{render, with_spinner};
use anyhow::Result;
use clap::Args;
use log::info;

#[derive(Args)]
pub struct RunCommands {
    /// Operation to perform (sum, subtract, multiply, divide or + - x /)
    pub operator: Operator,
    /// Operands, at least two
    #[arg(required = true, allow_hyphen_values = true)]
    pub operands: Vec<String>,
    /// Skip printing the refreshed history
    #[arg(long)]
    pub no_history: bool,
}

pub async fn run_command(ctx: &CommandContext, args: RunCommands) -> Result<()> {
    info!("Running {} with {} operands", args.operator, args.operands.len());
    let mut runtime = ctx.runtime(ctx.config.history)?;

    runtime.dispatch(Msg::SetOperands(args.operands));
    runtime.dispatch(Msg::OperatorPressed(args.operator));
    with_spinner(&format!("Calculating {}", args.operator), runtime.settle()).await;

    let state = runtime.state();
    if let Some(error) = state.last_error() {
        render::print_error(error);
        return Err(error.clone().into());
    }

    if let Some(value) = state.last_result() {
        render::print_result(value);
    }
    if !args.no_history {
        println!();
        render::print_history(state.history());
    }
    Ok(())
}
