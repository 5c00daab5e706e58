//! Self-describing metadata for the `resource_name` function.
//!
//! Hosts that expose [`crate::generate_resource_name`] to their own callers
//! use this to publish the parameter list and documentation.

use serde::Serialize;

/// Value type of a function parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Int64,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::String => f.write_str("string"),
            ValueKind::Int64 => f.write_str("int64"),
        }
    }
}

/// A single positional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ValueKind,
    pub description: &'static str,
}

/// Function name, documentation, ordered parameters and return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDefinition {
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub parameters: &'static [Parameter],
    pub returns: ValueKind,
}

static RESOURCE_NAME: FunctionDefinition = FunctionDefinition {
    name: "resource_name",
    summary: "Return Azure dx resources naming convention",
    description: "Given a name, a resource name, an instance number and a resource type, \
                  returns the Azure dx resources naming convention.",
    parameters: &[
        Parameter {
            name: "prefix",
            kind: ValueKind::String,
            description: "The default prefix for all resources that will be created.",
        },
        Parameter {
            name: "name",
            kind: ValueKind::String,
            description: "The resource distinctive name.",
        },
        Parameter {
            name: "resource_type",
            kind: ValueKind::String,
            description: "Resource type, one of the registry keys.",
        },
        Parameter {
            name: "instance_number",
            kind: ValueKind::Int64,
            description: "Instance number (1-99)",
        },
    ],
    returns: ValueKind::String,
};

/// Definition of the `resource_name` function.
pub fn resource_name_function() -> &'static FunctionDefinition {
    &RESOURCE_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_order() {
        let names: Vec<_> = resource_name_function()
            .parameters
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["prefix", "name", "resource_type", "instance_number"]);
    }

    #[test]
    fn test_definition_serializes() {
        let json = serde_json::to_value(resource_name_function()).unwrap();
        assert_eq!(json["name"], "resource_name");
        assert_eq!(json["returns"], "string");
        assert_eq!(json["parameters"][3]["kind"], "int64");
    }
}
