//! Error types for resource name generation.

use thiserror::Error;

/// Errors that can occur when generating a resource name.
///
/// Only one error is ever reported per call. Checks run in the order
/// prefix, instance number, resource type, name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The prefix does not follow the `xx-(d|u|p)-(itn|weu)` structure.
    #[error("prefix must be in the form of 'xx-(d|u|p)-(itn|weu)'")]
    InvalidPrefix,

    /// The instance number is outside `1..=99`.
    #[error("Instance must be between 1 and 99")]
    InstanceOutOfRange,

    /// The resource type has no abbreviation in the registry.
    #[error("resource '{resource_type}' not found. Accepted values are: {}", .accepted.join(", "))]
    UnknownResourceType {
        resource_type: String,
        accepted: Vec<&'static str>,
    },

    /// The distinctive resource name is empty.
    #[error("Resource name cannot be empty")]
    EmptyResourceName,
}

impl NamingError {
    /// Returns true if this error indicates a malformed prefix.
    pub fn is_invalid_prefix(&self) -> bool {
        matches!(self, NamingError::InvalidPrefix)
    }

    /// Returns true if this error indicates an instance number out of range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, NamingError::InstanceOutOfRange)
    }

    /// Returns true if this error indicates an unknown resource type.
    pub fn is_unknown_resource_type(&self) -> bool {
        matches!(self, NamingError::UnknownResourceType { .. })
    }

    /// Returns true if this error indicates an empty resource name.
    pub fn is_empty_name(&self) -> bool {
        matches!(self, NamingError::EmptyResourceName)
    }
}
