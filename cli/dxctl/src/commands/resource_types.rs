//! Resource type listing.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List supported resource types.
#[derive(Debug, Args)]
pub struct ResourceTypesCommand {
    /// Only show storage account types (formatted without hyphens).
    #[arg(long)]
    storage_only: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct ResourceTypeRow {
    #[tabled(rename = "RESOURCE TYPE")]
    resource_type: &'static str,
    #[tabled(rename = "ABBREVIATION")]
    abbreviation: &'static str,
    #[tabled(rename = "STORAGE ACCOUNT")]
    storage_account: bool,
}

impl ResourceTypesCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = rows(self.storage_only);
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn rows(storage_only: bool) -> Vec<ResourceTypeRow> {
    dx_naming::registry::entries()
        .map(|(resource_type, abbreviation)| ResourceTypeRow {
            resource_type,
            abbreviation,
            storage_account: dx_naming::is_storage_account(resource_type),
        })
        .filter(|row| !storage_only || row.storage_account)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_registry() {
        assert_eq!(rows(false).len(), dx_naming::registry::len());
    }

    #[test]
    fn test_storage_only() {
        let types: Vec<_> = rows(true).iter().map(|r| r.resource_type).collect();
        assert_eq!(types, ["function_storage_account", "storage_account"]);
    }
}
