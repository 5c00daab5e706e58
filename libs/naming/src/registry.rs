//! Resource type abbreviations.
//!
//! Every supported resource type maps to the short code used in generated
//! names. The table is built once on first access and never changes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::NamingError;

const ABBREVIATIONS: &[(&str, &str)] = &[
    // =========================================================================
    // Compute
    // =========================================================================
    ("virtual_machine", "vm"),
    ("container_app_job", "caj"),
    // =========================================================================
    // Storage
    // =========================================================================
    ("storage_account", "st"),
    ("blob_storage", "blob"),
    ("queue_storage", "queue"),
    ("table_storage", "table"),
    ("file_storage", "file"),
    ("function_storage_account", "stfn"),
    // =========================================================================
    // Networking
    // =========================================================================
    ("api_management", "apim"),
    ("api_management_autoscale", "apim-as"),
    ("virtual_network", "vnet"),
    ("network_security_group", "nsg"),
    ("apim_network_security_group", "apim-nsg"),
    ("app_gateway", "agw"),
    // =========================================================================
    // Private Endpoints
    // =========================================================================
    ("cosmos_private_endpoint", "cosno-pep"),
    ("postgre_private_endpoint", "psql-pep"),
    ("postgre_replica_private_endpoint", "psql-pep-replica"),
    ("app_private_endpoint", "app-pep"),
    ("app_slot_private_endpoint", "staging-app-pep"),
    ("function_private_endpoint", "func-pep"),
    ("function_slot_private_endpoint", "staging-func-pep"),
    ("blob_private_endpoint", "blob-pep"),
    ("queue_private_endpoint", "queue-pep"),
    ("file_private_endpoint", "file-pep"),
    ("table_private_endpoint", "table-pep"),
    ("eventhub_private_endpoint", "evhns-pep"),
    // =========================================================================
    // Subnets
    // =========================================================================
    ("app_subnet", "app-snet"),
    ("apim_subnet", "apim-snet"),
    ("function_subnet", "func-snet"),
    // =========================================================================
    // Databases
    // =========================================================================
    ("cosmos_db", "cosmos"),
    ("cosmos_db_nosql", "cosno"),
    ("postgresql", "psql"),
    ("postgresq_replica", "psql-replica"),
    // =========================================================================
    // Integration
    // =========================================================================
    ("eventhub_namespace", "evhns"),
    ("function_app", "func"),
    ("app_service", "app"),
    ("app_service_plan", "asp"),
    // =========================================================================
    // Security
    // =========================================================================
    ("key_vault", "kv"),
    // =========================================================================
    // Monitoring
    // =========================================================================
    ("application_insights", "appi"),
    // =========================================================================
    // Miscellaneous
    // =========================================================================
    ("resource_group", "rg"),
];

static REGISTRY: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// Returns the abbreviation for a resource type.
///
/// An unknown type yields [`NamingError::UnknownResourceType`] listing every
/// accepted key in sorted order.
pub fn lookup(resource_type: &str) -> Result<&'static str, NamingError> {
    REGISTRY
        .get(resource_type)
        .copied()
        .ok_or_else(|| NamingError::UnknownResourceType {
            resource_type: resource_type.to_string(),
            accepted: keys().collect(),
        })
}

/// Returns true if the resource type has an abbreviation.
pub fn contains(resource_type: &str) -> bool {
    REGISTRY.contains_key(resource_type)
}

/// All resource type keys, sorted.
pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

/// All `(resource type, abbreviation)` pairs, sorted by resource type.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    REGISTRY.iter().map(|(k, v)| (*k, *v))
}

/// Number of registered resource types.
pub fn len() -> usize {
    REGISTRY.len()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("virtual_machine", "vm")]
    #[case("storage_account", "st")]
    #[case("function_storage_account", "stfn")]
    #[case("apim_network_security_group", "apim-nsg")]
    #[case("function_slot_private_endpoint", "staging-func-pep")]
    #[case("postgre_replica_private_endpoint", "psql-pep-replica")]
    #[case("postgresq_replica", "psql-replica")]
    #[case("application_insights", "appi")]
    #[case("resource_group", "rg")]
    fn test_lookup_known(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(lookup(key).unwrap(), expected);
    }

    #[test]
    fn test_lookup_unknown_lists_every_key() {
        let err = lookup("not_a_type").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("resource 'not_a_type' not found. Accepted values are: "));
        for key in keys() {
            assert!(message.contains(key), "message should mention {key}");
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(len(), ABBREVIATIONS.len());
        assert_eq!(len(), 40);
    }

    #[test]
    fn test_keys_sorted() {
        let keys: Vec<_> = keys().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(contains("key_vault"));
        assert!(!contains("KEY_VAULT"));
        assert!(lookup("Key_Vault").is_err());
    }

    #[test]
    fn test_entries_match_lookup() {
        for (key, abbreviation) in entries() {
            assert_eq!(lookup(key).unwrap(), abbreviation);
        }
    }
}
