use crate::api::Operator;
use crate::calc::{Mode, Msg};
use crate::cli::context::CommandContext;
use crate::cli::ui::{render, with_spinner};
use crate::error::ParseValueError;
use anyhow::Result;
use clap::Args;
use log::info;
use std::str::FromStr;

#[derive(Args)]
pub struct BatchCommands {
    /// Operations to queue, e.g. "sum:1,2,3" or "divide 10 4"
    #[arg(required = true)]
    pub items: Vec<BatchItemArg>,
    /// Print the refreshed history after the batch
    #[arg(long)]
    pub history: bool,
}

/// One queued operation given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItemArg {
    pub operator: Operator,
    pub operands: Vec<String>,
}

impl FromStr for BatchItemArg {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseValueError {
            kind: "batch item",
            value: s.to_string(),
            expected: "'<operator>:<n>,<n>,...' or '<operator> <n> <n> ...'",
        };

        let s = s.trim();
        let (operator, rest) = match s.split_once(':') {
            Some(parts) => parts,
            None => s.split_once(char::is_whitespace).ok_or_else(invalid)?,
        };
        let operator: Operator = operator.trim().parse().map_err(|_| invalid())?;

        // empty entries are kept so validation can point at them
        let operands: Vec<String> = if rest.contains(',') {
            rest.split(',').map(|t| t.trim().to_string()).collect()
        } else {
            rest.split_whitespace().map(str::to_string).collect()
        };

        Ok(Self { operator, operands })
    }
}

pub async fn batch_command(ctx: &CommandContext, args: BatchCommands) -> Result<()> {
    let mut runtime = ctx.runtime(ctx.config.history)?;
    if runtime.state().mode() != Mode::Queued {
        runtime.dispatch(Msg::ToggleMode);
    }

    for (i, item) in args.items.into_iter().enumerate() {
        runtime.dispatch(Msg::SetOperands(item.operands));
        runtime.dispatch(Msg::Enqueue(item.operator));
        if let Some(error) = runtime.state().queue_error() {
            render::print_error(format!("item {}: {}", i + 1, error));
            return Err(error.clone().into());
        }
    }

    info!("Submitting batch of {} operations", runtime.state().queue().len());
    runtime.dispatch(Msg::ExecuteQueue);
    with_spinner("Executing batch", runtime.settle()).await;

    let state = runtime.state();
    if let Some(error) = state.queue_error() {
        render::print_error(error);
        return Err(error.clone().into());
    }

    render::print_outcomes(state.queue_outcomes());
    if args.history {
        println!();
        render::print_history(state.history());
    }
    Ok(())
}
