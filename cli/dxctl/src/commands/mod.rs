//! CLI commands.

mod config;
mod function;
mod prefix;
mod resource_name;
mod resource_types;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::error::CliError;
use crate::output::OutputFormat;

/// dx CLI - Generate resource names following the dx naming convention.
#[derive(Debug, Parser)]
#[command(name = "dx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Naming prefix, overriding the saved configuration.
    #[arg(long, global = true, env = "DX_PREFIX")]
    prefix: Option<String>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, env = "DX_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a resource name.
    ResourceName(resource_name::ResourceNameCommand),

    /// Show the configured prefix.
    Prefix(prefix::PrefixCommand),

    /// List supported resource types and their abbreviations.
    ResourceTypes(resource_types::ResourceTypesCommand),

    /// Describe the resource_name function.
    Function(function::FunctionCommand),

    /// Show or change the saved configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Log level requested on the command line or environment.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = OutputFormat::from_flag(&self.format);
        let config = crate::config::Config::load_or_default();

        let ctx = CommandContext {
            config,
            format,
            prefix: self.prefix,
        };

        match self.command {
            Commands::ResourceName(cmd) => cmd.run(ctx),
            Commands::Prefix(cmd) => cmd.run(ctx),
            Commands::ResourceTypes(cmd) => cmd.run(ctx),
            Commands::Function(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("dx {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: crate::config::Config,
    pub format: OutputFormat,
    pub prefix: Option<String>,
}

impl CommandContext {
    /// Resolve the prefix, preferring flag over config.
    pub fn resolve_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().or(self.config.prefix.as_deref())
    }

    /// Require a prefix to be configured.
    pub fn require_prefix(&self) -> Result<&str> {
        self.resolve_prefix()
            .ok_or_else(|| CliError::MissingPrefix.into())
    }
}
