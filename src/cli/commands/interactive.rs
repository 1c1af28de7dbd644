//! Interactive calculator session

use crate::api::{OperationFilter, Operator, SortField};
use crate::calc::{Mode, Msg, Route, Runtime};
use crate::cli::context::CommandContext;
use crate::cli::ui::{render, with_spinner};
use crate::ui::prompts::{prompt_operand, prompt_select};
use anyhow::Result;
use clap::Args;
use colored::*;
use std::fmt;

#[derive(Args)]
pub struct InteractiveCommands {
    /// Start in queued mode
    #[arg(long)]
    pub queued: bool,
}

/// Clear the screen for a clean interactive experience
fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

#[derive(Debug, Clone, Copy)]
enum MenuOption {
    EditOperands,
    AddOperand,
    RemoveOperand,
    Calculate(Operator, Route),
    ExecuteQueue(usize),
    ToggleMode(Mode),
    History,
    Exit,
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuOption::EditOperands => write!(f, "✏️ {} - {}", "Edit operands".bright_yellow().bold(), "Change operand values".dimmed()),
            MenuOption::AddOperand => write!(f, "➕ {} - {}", "Add operand".bright_green().bold(), "Append an empty field".dimmed()),
            MenuOption::RemoveOperand => write!(f, "➖ {} - {}", "Remove operand".bright_red().bold(), "Drop one field".dimmed()),
            MenuOption::Calculate(op, Route::Execute) => {
                write!(f, "{} {} - {}", op.symbol(), op.as_str().bright_cyan().bold(), "Calculate now".dimmed())
            }
            MenuOption::Calculate(op, Route::Enqueue) => {
                write!(f, "{} {} - {}", op.symbol(), op.as_str().bright_cyan().bold(), "Add to queue".dimmed())
            }
            MenuOption::ExecuteQueue(n) => {
                write!(f, "🚀 {} - {}", "Execute queue".bright_green().bold(), format!("Send {} queued operations", n).dimmed())
            }
            MenuOption::ToggleMode(Mode::Immediate) => {
                write!(f, "🔁 {} - {}", "Queued mode".bright_yellow().bold(), "Collect operations into a batch".dimmed())
            }
            MenuOption::ToggleMode(Mode::Queued) => {
                write!(f, "🔁 {} - {}", "Immediate mode".bright_yellow().bold(), "Calculate each operation right away".dimmed())
            }
            MenuOption::History => write!(f, "📜 {} - {}", "History".bright_blue().bold(), "Filter, sort and refresh".dimmed()),
            MenuOption::Exit => write!(f, "🚪 {} - {}", "Exit".bright_red().bold(), "Leave the calculator".dimmed()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum HistoryOption {
    Filter,
    OrderBy,
    Direction,
    Refresh,
    Back,
}

impl fmt::Display for HistoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryOption::Filter => write!(f, "🔎 {} - {}", "Filter".bright_blue().bold(), "Show one operation type".dimmed()),
            HistoryOption::OrderBy => write!(f, "📊 {} - {}", "Order by".bright_cyan().bold(), "Sort by date or result".dimmed()),
            HistoryOption::Direction => write!(f, "🔁 {} - {}", "Direction".bright_cyan().bold(), "Flip ascending/descending".dimmed()),
            HistoryOption::Refresh => write!(f, "🔄 {} - {}", "Refresh".bright_green().bold(), "Reload from the service".dimmed()),
            HistoryOption::Back => write!(f, "🔙 {} - {}", "Back".white().bold(), "Return to calculator".dimmed()),
        }
    }
}

pub async fn interactive_command(ctx: &CommandContext, args: InteractiveCommands) -> Result<()> {
    let mut runtime = Runtime::new(ctx.client()?, ctx.config.behavior, ctx.config.history);
    if args.queued {
        runtime.dispatch(Msg::ToggleMode);
    }
    with_spinner("Loading history", runtime.settle()).await;

    loop {
        clear_screen();
        println!();
        println!("  {}", "🧮 Calculator".bright_blue().bold());
        println!("  {}", "═════════════".bright_blue());
        println!();
        render::print_state(runtime.state());

        let options = main_options(&runtime);
        let selection = prompt_select("What would you like to do?", &options, 0)?;

        match options[selection] {
            MenuOption::EditOperands => edit_operands(&mut runtime)?,
            MenuOption::AddOperand => runtime.dispatch(Msg::AddOperand),
            MenuOption::RemoveOperand => remove_operand(&mut runtime)?,
            MenuOption::Calculate(op, _) => {
                runtime.dispatch(Msg::OperatorPressed(op));
                with_spinner(format!("Calculating {}", op), runtime.settle()).await;
            }
            MenuOption::ExecuteQueue(_) => {
                runtime.dispatch(Msg::ExecuteQueue);
                with_spinner("Executing queue", runtime.settle()).await;
            }
            MenuOption::ToggleMode(_) => runtime.dispatch(Msg::ToggleMode),
            MenuOption::History => history_menu(&mut runtime).await?,
            MenuOption::Exit => {
                println!("Goodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn main_options(runtime: &Runtime) -> Vec<MenuOption> {
    let state = runtime.state();
    let mut options = vec![MenuOption::EditOperands, MenuOption::AddOperand];
    if state.operands().can_remove() {
        options.push(MenuOption::RemoveOperand);
    }
    for op in Operator::ALL {
        options.push(MenuOption::Calculate(op, state.mode().route(op, state.behavior())));
    }
    if state.mode() == Mode::Queued && state.can_execute_queue() {
        options.push(MenuOption::ExecuteQueue(state.queue().len()));
    }
    options.push(MenuOption::ToggleMode(state.mode()));
    options.push(MenuOption::History);
    options.push(MenuOption::Exit);
    options
}

fn edit_operands(runtime: &mut Runtime) -> Result<()> {
    let fields = runtime.state().operands().fields().to_vec();
    for (position, field) in fields.into_iter().enumerate() {
        let text = prompt_operand(position, &field.text)?;
        runtime.dispatch(Msg::EditOperand { id: field.id, text });
    }
    Ok(())
}

fn remove_operand(runtime: &mut Runtime) -> Result<()> {
    let fields = runtime.state().operands().fields().to_vec();
    let labels: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{}. {}", i + 1, field.text))
        .collect();
    let selection = prompt_select("Remove which operand?", &labels, fields.len() - 1)?;
    runtime.dispatch(Msg::RemoveOperand(fields[selection].id));
    Ok(())
}

async fn history_menu(runtime: &mut Runtime) -> Result<()> {
    loop {
        clear_screen();
        println!();
        render::print_history(runtime.state().history());
        println!();

        let options = [
            HistoryOption::Filter,
            HistoryOption::OrderBy,
            HistoryOption::Direction,
            HistoryOption::Refresh,
            HistoryOption::Back,
        ];
        let selection = prompt_select("History", &options, 0)?;
        let projection = *runtime.state().history().projection();

        let msg = match options[selection] {
            HistoryOption::Filter => {
                let mut filters = vec![OperationFilter::All];
                filters.extend(Operator::ALL.into_iter().map(OperationFilter::only));
                let current = filters.iter().position(|f| *f == projection.filter).unwrap_or(0);
                let selection = prompt_select("Operation", &filters, current)?;
                Msg::SetFilter(filters[selection])
            }
            HistoryOption::OrderBy => {
                let fields = [SortField::Date, SortField::Result];
                let current = fields.iter().position(|f| *f == projection.order_by).unwrap_or(0);
                let selection = prompt_select("Order by", &fields, current)?;
                Msg::SetOrderBy(fields[selection])
            }
            HistoryOption::Direction => Msg::SetDirection(projection.direction.reversed()),
            HistoryOption::Refresh => Msg::RefreshHistory,
            HistoryOption::Back => return Ok(()),
        };

        runtime.dispatch(msg);
        with_spinner("Loading history", runtime.settle()).await;
    }
}
