//! Config commands (saved default prefix).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage the saved configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the saved configuration.
    Show,

    /// Save the default prefix.
    SetPrefix {
        /// Prefix to store (stored as written).
        #[arg(value_name = "PREFIX")]
        value: String,
    },

    /// Clear the saved configuration.
    Clear,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    prefix: Option<String>,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetPrefix { value } => set_prefix(ctx, value),
            ConfigSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: crate::config::config_path()?.display().to_string(),
        prefix: ctx.config.prefix.clone(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("prefix: {}", view.prefix.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn set_prefix(mut ctx: CommandContext, prefix: String) -> Result<()> {
    if let Err(e) = dx_naming::Prefix::parse(&prefix) {
        tracing::warn!(prefix = %prefix, error = %e, "Saving prefix that will not generate names");
    }

    ctx.config.prefix = Some(prefix);
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Saved prefix"),
    }

    Ok(())
}

fn clear(mut ctx: CommandContext) -> Result<()> {
    ctx.config.prefix = None;
    ctx.config.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved configuration"),
    }

    Ok(())
}
