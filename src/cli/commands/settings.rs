use crate::cli::context::CommandContext;
use crate::config::{Config, SETTING_NAMES};
use crate::ui::prompts::prompt_confirmation;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current settings
    Show,
    /// Get the value of a specific setting
    Get {
        /// Setting name
        name: String,
    },
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
    /// Reset all settings to default values
    ResetAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn settings_command(ctx: &CommandContext, args: SettingsCommands) -> Result<()> {
    // settings edits go to the file as written, without env or flag overrides
    let path = &ctx.config_path;
    let mut config = Config::load_from(path)?;

    match args.command {
        SettingsSubcommands::Show => {
            println!("{} {}", "Config file:".dimmed(), path.display());
            for name in SETTING_NAMES {
                println!("  {:<26} {}", name.bright_white(), config.get_setting(name)?);
            }
            if ctx.config.server.base_url != config.server.base_url {
                println!(
                    "{} {}",
                    "Effective base-url:".yellow(),
                    ctx.config.server.base_url
                );
            }
        }
        SettingsSubcommands::Get { name } => {
            println!("{}", config.get_setting(&name)?);
        }
        SettingsSubcommands::Set { name, value } => {
            config.set_setting(&name, &value)?;
            config.save_to(path)?;
            println!("{} {} = {}", "✓".bright_green(), name, config.get_setting(&name)?);
        }
        SettingsSubcommands::Reset { name } => {
            config.reset_setting(&name)?;
            config.save_to(path)?;
            println!("{} {} reset to {}", "✓".bright_green(), name, config.get_setting(&name)?);
        }
        SettingsSubcommands::ResetAll { force } => {
            if !force && !prompt_confirmation("Reset all settings to their defaults?", false)? {
                println!("Cancelled");
                return Ok(());
            }
            Config::default().save_to(path)?;
            println!("{} All settings reset", "✓".bright_green());
        }
    }

    Ok(())
}
