//! # dx-naming
//!
//! Deterministic resource names for cloud infrastructure.
//!
//! ## Name Format
//!
//! A name is built from a prefix, a distinctive name, the abbreviation of a
//! resource type, and a two-digit instance number:
//!
//! - `ab-d-itn-myapp-app-01` for most resource types
//! - `abditnmystorest02` for storage accounts, which do not allow hyphens
//!
//! Generated names are always lowercase and are never cached: the same
//! inputs always produce the same output.
//!
//! ## Validation Order
//!
//! Inputs are checked in a fixed order and the first failure is returned:
//! prefix, instance number, resource type, name.

mod definition;
mod error;
mod format;
mod instance;
mod prefix;
pub mod registry;

pub use definition::{resource_name_function, FunctionDefinition, Parameter, ValueKind};
pub use error::NamingError;
pub use format::{format_name, is_storage_account};
pub use instance::InstanceNumber;
pub use prefix::{Prefix, PREFIX_PATTERN};

/// Validates the prefix and instance number.
///
/// The prefix check runs first.
pub fn validate(prefix: &str, instance_number: i64) -> Result<(Prefix, InstanceNumber), NamingError> {
    let prefix = Prefix::parse(prefix)?;
    let instance = InstanceNumber::new(instance_number)?;
    Ok((prefix, instance))
}

/// Generates the conventional name for a resource.
///
/// # Errors
///
/// - [`NamingError::InvalidPrefix`] if the prefix is malformed
/// - [`NamingError::InstanceOutOfRange`] if the instance is outside `1..=99`
/// - [`NamingError::UnknownResourceType`] if the type is not registered
/// - [`NamingError::EmptyResourceName`] if the name is empty
pub fn generate_resource_name(
    prefix: &str,
    name: &str,
    resource_type: &str,
    instance_number: i64,
) -> Result<String, NamingError> {
    let result = generate(prefix, name, resource_type, instance_number);

    match &result {
        Ok(generated) => tracing::debug!(resource_type, name = %generated, "Generated resource name"),
        Err(e) => tracing::debug!(resource_type, error = %e, "Rejected resource name request"),
    }

    result
}

fn generate(
    prefix: &str,
    name: &str,
    resource_type: &str,
    instance_number: i64,
) -> Result<String, NamingError> {
    let (prefix, instance) = validate(prefix, instance_number)?;
    let abbreviation = registry::lookup(resource_type)?;

    if name.is_empty() {
        return Err(NamingError::EmptyResourceName);
    }

    Ok(format_name(&prefix, name, abbreviation, instance, resource_type))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_prefix_error_wins_over_instance_error() {
        assert_eq!(
            generate_resource_name("bad", "x", "app_service", 0),
            Err(NamingError::InvalidPrefix)
        );
    }

    #[test]
    fn test_instance_error_wins_over_unknown_type() {
        assert_eq!(
            generate_resource_name("ab-d-itn", "x", "bogus", 100),
            Err(NamingError::InstanceOutOfRange)
        );
    }

    #[test]
    fn test_unknown_type_wins_over_empty_name() {
        let err = generate_resource_name("ab-d-itn", "", "bogus", 1).unwrap_err();
        assert!(err.is_unknown_resource_type());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            generate_resource_name("ab-d-itn", "", "app_service", 1),
            Err(NamingError::EmptyResourceName)
        );
    }

    #[test]
    fn test_validate_returns_parsed_parts() {
        let (prefix, instance) = validate("AB-U-WEU", 5).unwrap();
        assert_eq!(prefix.as_str(), "ab-u-weu");
        assert_eq!(instance.to_string(), "05");
    }

    fn valid_prefix() -> impl Strategy<Value = String> {
        "[a-zA-Z]{2}-[dupDUP]-(itn|weu|ITN|WEU)(-[a-z]{1,6})?"
    }

    fn resource_type() -> impl Strategy<Value = &'static str> {
        let keys: Vec<&'static str> = registry::keys().collect();
        prop::sample::select(keys)
    }

    proptest! {
        #[test]
        fn prop_generation_is_deterministic(
            prefix in valid_prefix(),
            name in "[a-zA-Z0-9]{1,12}",
            resource_type in resource_type(),
            instance in 1i64..=99,
        ) {
            let first = generate_resource_name(&prefix, &name, resource_type, instance);
            let second = generate_resource_name(&prefix, &name, resource_type, instance);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_output_is_lowercase(
            prefix in valid_prefix(),
            name in "[a-zA-Z0-9]{1,12}",
            resource_type in resource_type(),
            instance in 1i64..=99,
        ) {
            let generated = generate_resource_name(&prefix, &name, resource_type, instance).unwrap();
            prop_assert_eq!(generated.to_lowercase(), generated.clone());
            let suffix = format!("{instance:02}");
            prop_assert!(generated.ends_with(&suffix));
        }

        #[test]
        fn prop_out_of_range_instance_rejected(
            instance in prop_oneof![i64::MIN..1i64, 100i64..=i64::MAX],
        ) {
            prop_assert_eq!(
                generate_resource_name("ab-d-itn", "x", "app_service", instance),
                Err(NamingError::InstanceOutOfRange)
            );
        }
    }
}
