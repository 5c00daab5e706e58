//! Function definition display.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Describe the resource_name function and its parameters.
#[derive(Debug, Args)]
pub struct FunctionCommand {}

#[derive(Debug, Serialize, Tabled)]
struct ParameterRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "NAME")]
    name: &'static str,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "DESCRIPTION")]
    description: &'static str,
}

impl FunctionCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let definition = dx_naming::resource_name_function();

        match ctx.format {
            OutputFormat::Json => print_single(definition),
            OutputFormat::Table => {
                println!("{} -> {}", definition.name.bold(), definition.returns);
                println!("{}", definition.summary);
                println!("{}\n", definition.description.dimmed());

                let rows: Vec<_> = definition
                    .parameters
                    .iter()
                    .enumerate()
                    .map(|(i, p)| ParameterRow {
                        position: i + 1,
                        name: p.name,
                        kind: p.kind.to_string(),
                        description: p.description,
                    })
                    .collect();
                print_output(&rows, OutputFormat::Table);
            }
        }

        Ok(())
    }
}
