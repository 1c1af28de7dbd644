use crate::api::{OperationFilter, SortDirection, SortField};
use crate::calc::Msg;
use crate::cli::context::CommandContext;
use crate::cli::ui::{render, with_spinner};
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct HistoryCommands {
    /// Only show one operation type ("all" for everything)
    #[arg(short, long)]
    pub operation: Option<OperationFilter>,
    /// Sort field: date or result
    #[arg(long)]
    pub order_by: Option<SortField>,
    /// Sort direction: asc or desc
    #[arg(long)]
    pub sort_order: Option<SortDirection>,
}

pub async fn history_command(ctx: &CommandContext, args: HistoryCommands) -> Result<()> {
    let mut projection = ctx.config.history;
    if let Some(filter) = args.operation {
        projection = projection.with_filter(filter);
    }
    if let Some(order_by) = args.order_by {
        projection = projection.with_order_by(order_by);
    }
    if let Some(direction) = args.sort_order {
        projection = projection.with_direction(direction);
    }

    let mut runtime = ctx.runtime(projection)?;
    runtime.dispatch(Msg::RefreshHistory);
    with_spinner("Loading history", runtime.settle()).await;

    let history = runtime.state().history();
    if let Some(error) = history.last_error() {
        render::print_error(error);
        return Err(error.clone().into());
    }
    render::print_history(history);
    Ok(())
}
