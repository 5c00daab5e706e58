//! Resource name generation command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Generate a resource name from the configured prefix.
#[derive(Debug, Args)]
pub struct ResourceNameCommand {
    /// Distinctive name of the resource.
    name: String,

    /// Resource type (see `dx resource-types`).
    resource_type: String,

    /// Instance number (1-99).
    #[arg(allow_negative_numbers = true)]
    instance_number: i64,
}

#[derive(Debug, Serialize)]
struct GeneratedName {
    name: String,
}

impl ResourceNameCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let name = self.generate(&ctx)?;

        match ctx.format {
            OutputFormat::Json => print_single(&GeneratedName { name }),
            OutputFormat::Table => println!("{}", name),
        }

        Ok(())
    }

    fn generate(&self, ctx: &CommandContext) -> Result<String> {
        let prefix = ctx.require_prefix()?;

        let name = dx_naming::generate_resource_name(
            prefix,
            &self.name,
            &self.resource_type,
            self.instance_number,
        )
        .map_err(CliError::from)?;

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use dx_naming::NamingError;

    use super::*;
    use crate::config::Config;

    fn ctx(prefix: Option<&str>) -> CommandContext {
        CommandContext {
            config: Config::default(),
            format: OutputFormat::Table,
            prefix: prefix.map(str::to_string),
        }
    }

    fn command(name: &str, resource_type: &str, instance_number: i64) -> ResourceNameCommand {
        ResourceNameCommand {
            name: name.to_string(),
            resource_type: resource_type.to_string(),
            instance_number,
        }
    }

    #[test]
    fn test_generate_uses_resolved_prefix() {
        let name = command("myapp", "app_service", 1)
            .generate(&ctx(Some("ab-d-itn")))
            .unwrap();
        assert_eq!(name, "ab-d-itn-myapp-app-01");
    }

    #[test]
    fn test_generate_without_prefix() {
        let err = command("myapp", "app_service", 1)
            .generate(&ctx(None))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingPrefix)
        ));
    }

    #[test]
    fn test_generate_surfaces_naming_error() {
        let err = command("myapp", "app_service", 0)
            .generate(&ctx(Some("ab-d-itn")))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Naming(NamingError::InstanceOutOfRange))
        ));
    }
}
