//! Schema definitions for drift reports.
//!
//! Defines the structures that represent the per-resource classification
//! and field-level differences between the cloud and IaC sides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One report entry per observed cloud resource
///
/// Borrows the underlying records from the input collections; only the
/// classification and change log are owned.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportEntry<'a> {
    /// The observed cloud resource, verbatim
    #[serde(rename = "CloudResourceItem")]
    pub cloud_resource_item: &'a Value,

    /// The matched IaC declaration, or `null` if no counterpart was found
    #[serde(rename = "IacResourceItem")]
    pub iac_resource_item: Option<&'a Value>,

    /// Classification of the resource pair
    #[serde(rename = "State")]
    pub state: ResourceState,

    /// Field-level differences, empty unless the state is `Modified`
    #[serde(rename = "ChangeLog")]
    pub change_log: Vec<Difference>,
}

/// Classification of one observed resource against its IaC counterpart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceState {
    /// Counterpart found, no differences
    Match,

    /// Counterpart found, at least one differing field
    Modified,

    /// No counterpart in the IaC collection
    Missing,
}

/// A single field-level difference between the two sides
///
/// `key_name` is the path to the differing leaf: nested field names joined
/// by `.`, sequence indices rendered as `[i]` (e.g. `subnets[1].cidr_block`).
/// A side on which the key or index does not exist is rendered as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Difference {
    /// Path to the differing leaf value
    #[serde(rename = "KeyName")]
    pub key_name: String,

    /// Value on the cloud side (`null` when absent)
    #[serde(rename = "CloudValue")]
    pub cloud_value: Value,

    /// Value on the IaC side (`null` when absent)
    #[serde(rename = "IacValue")]
    pub iac_value: Value,
}

/// Name a JSON value's kind for diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
