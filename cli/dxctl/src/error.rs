//! Error handling and display for the CLI.

use colored::Colorize;
use dx_naming::NamingError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No prefix configured. Use --prefix, set DX_PREFIX, or run `dx config set-prefix`.")]
    MissingPrefix,

    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::MissingPrefix => Some("Hint: Run `dx config set-prefix <PREFIX>` to save a default."),
        CliError::Naming(NamingError::InvalidPrefix) => {
            Some("Hint: A prefix looks like `io-p-itn` or `io-d-weu-extra`.")
        }
        CliError::Naming(NamingError::UnknownResourceType { .. }) => {
            Some("Hint: Run `dx resource-types` to list supported resource types.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_error_is_transparent() {
        let err = CliError::from(NamingError::EmptyResourceName);
        assert_eq!(err.to_string(), "Resource name cannot be empty");
        assert!(hint(&err).is_none());
    }

    #[test]
    fn test_hints() {
        assert!(hint(&CliError::MissingPrefix).is_some());
        assert!(hint(&CliError::Naming(NamingError::InvalidPrefix)).is_some());
    }
}
