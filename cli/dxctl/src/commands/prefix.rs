//! Prefix value read (the `dx_prefix_value` data source).
//!
//! Echoes the configured prefix as both id and value, untouched.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Show the configured prefix.
#[derive(Debug, Args)]
pub struct PrefixCommand {}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct PrefixValue {
    id: String,
    value: String,
}

impl PrefixValue {
    fn read(prefix: &str) -> Self {
        Self {
            id: prefix.to_string(),
            value: prefix.to_string(),
        }
    }
}

impl PrefixCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let value = PrefixValue::read(ctx.require_prefix()?);

        match ctx.format {
            OutputFormat::Json => print_single(&value),
            OutputFormat::Table => {
                println!("id: {}", value.id);
                println!("value: {}", value.value);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_value_is_echoed() {
        let value = PrefixValue::read("Not-Validated");
        assert_eq!(value.id, "Not-Validated");
        assert_eq!(value.value, "Not-Validated");
    }
}
