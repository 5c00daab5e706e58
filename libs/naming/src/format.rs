//! Name assembly.

use crate::{InstanceNumber, Prefix};

/// Substring marking the storage account family of resource types.
const STORAGE_ACCOUNT_MARKER: &str = "storage_account";

/// Returns true if the resource type belongs to the storage account family.
///
/// Storage account names may not contain hyphens, so they are formatted
/// without separators.
pub fn is_storage_account(resource_type: &str) -> bool {
    resource_type.contains(STORAGE_ACCOUNT_MARKER)
}

/// Assembles a resource name from already validated parts.
///
/// - storage accounts: `{prefix without hyphens}{name}{abbreviation}{NN}`
/// - everything else: `{prefix}-{name}-{abbreviation}-{NN}`
///
/// The result is always lowercase.
#[must_use]
pub fn format_name(
    prefix: &Prefix,
    name: &str,
    abbreviation: &str,
    instance: InstanceNumber,
    resource_type: &str,
) -> String {
    let name = if is_storage_account(resource_type) {
        format!("{}{}{}{}", prefix.compact(), name, abbreviation, instance)
    } else {
        format!("{}-{}-{}-{}", prefix, name, abbreviation, instance)
    };

    name.to_lowercase()
}
