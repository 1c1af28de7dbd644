use crate::api::CalculatorApi;
use crate::calc::validate;
use crate::cli::context::CommandContext;
use crate::cli::ui::{render, with_spinner};
use crate::error::CalcError;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct LegacySumCommands {
    #[arg(allow_hyphen_values = true)]
    pub a: String,
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

/// Two-operand sum through the older `/sum` endpoint. Operands go through
/// the same validation as every other operation before anything is sent.
pub async fn legacy_sum(api: &dyn CalculatorApi, a: &str, b: &str) -> Result<f64, CalcError> {
    let operands = validate(&[a, b])?;
    api.sum_pair(operands[0], operands[1]).await
}

pub async fn legacy_sum_command(ctx: &CommandContext, args: LegacySumCommands) -> Result<()> {
    let api = ctx.client()?;
    match with_spinner("Calculating sum", legacy_sum(api.as_ref(), &args.a, &args.b)).await {
        Ok(value) => {
            render::print_result(value);
            Ok(())
        }
        Err(e) => {
            render::print_error(&e);
            Err(e.into())
        }
    }
}
