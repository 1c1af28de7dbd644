//! Terminal rendering of session state

use crate::api::operations::format_number;
use crate::api::{HistoryEntry, OperationOutcome};
use crate::calc::{AppState, HistoryStatus, HistoryView, Mode};
use colored::*;

pub fn print_result(value: f64) {
    println!("{} {}", "Result:".bright_green().bold(), format_number(value).bright_white().bold());
}

pub fn print_error(message: impl std::fmt::Display) {
    println!("{} {}", "Error:".bright_red().bold(), message);
}

pub fn print_outcomes(outcomes: &[OperationOutcome]) {
    if outcomes.is_empty() {
        return;
    }

    println!("{}", "Batch results:".bright_blue().bold());
    for outcome in outcomes {
        let label = format!("#{} {}", outcome.index + 1, outcome.request.describe());
        match &outcome.result {
            Ok(value) => println!("  {} = {}", label, format_number(*value).bright_green()),
            Err(failure) => println!("  {}: {}", label, failure.message.bright_red()),
        }
    }
}

fn history_line(entry: &HistoryEntry) -> String {
    format!("{}  {}", entry.summary(), format!("({})", entry.display_date()).dimmed())
}

pub fn print_history(view: &HistoryView) {
    let projection = view.projection();
    println!(
        "{} {}",
        "History".bright_blue().bold(),
        format!(
            "[operation: {}, order: {} {}]",
            projection.filter, projection.order_by, projection.direction
        )
        .dimmed()
    );

    match view.status() {
        HistoryStatus::NotLoaded => println!("  {}", "History not loaded".dimmed()),
        HistoryStatus::Empty => println!("  {}", view.empty_message().dimmed()),
        HistoryStatus::Loaded(_) => {
            for entry in view.entries() {
                println!("  {}", history_line(entry));
            }
        }
    }

    if let Some(error) = view.last_error() {
        println!("  {} {}", "Could not refresh history:".yellow(), error);
    }
}

/// Full session view used by the interactive mode
pub fn print_state(state: &AppState) {
    let mode = match state.mode() {
        Mode::Immediate => "Immediate".bright_green().bold(),
        Mode::Queued => "Queued".bright_yellow().bold(),
    };
    println!("  {} {}", "Mode:".dimmed(), mode);

    println!("  {}", "Operands:".dimmed());
    for (i, field) in state.operands().fields().iter().enumerate() {
        let text = if field.text.is_empty() {
            "<empty>".dimmed()
        } else {
            field.text.normal()
        };
        println!("    {}. {}", i + 1, text);
    }

    match state.mode() {
        Mode::Immediate => {
            if let Some(value) = state.last_result() {
                print!("  ");
                print_result(value);
            }
        }
        Mode::Queued => {
            println!("  {} {}", "Queued:".dimmed(), state.queue().len());
            for (i, request) in state.queue().entries().iter().enumerate() {
                println!("    {}. {}", i + 1, request);
            }
            // one result slot at a time: batch outcomes or an immediate divide
            if !state.queue_outcomes().is_empty() {
                print_outcomes(state.queue_outcomes());
            } else if let Some(value) = state.last_result() {
                print!("  ");
                print_result(value);
            }
        }
    }

    if let Some(error) = state.last_error() {
        print!("  ");
        print_error(error);
    }
    if let Some(error) = state.queue_error() {
        print!("  ");
        print_error(error);
    }
    println!();
}
