//! Lookup index over the IaC collection and counterpart matching.
//!
//! IaC resources are indexed by `id` and `name` in separate namespaces so a
//! resource's name can never collide with a different resource's id. Records
//! carrying neither field fall back to a positional map.

use crate::utils::config::{ID_FIELD, NAME_FIELD, POSITIONAL_KEY_PREFIX};
use log::warn;
use serde_json::Value;
use std::collections::HashMap;

/// Read-only lookup structures over the IaC collection
///
/// Borrows the declared records; nothing is copied or mutated.
#[derive(Debug)]
pub struct ResourceIndex<'a> {
    by_id: HashMap<String, &'a Value>,
    by_name: HashMap<String, &'a Value>,
    by_position: HashMap<String, &'a Value>,
}

impl<'a> ResourceIndex<'a> {
    /// Build the index from the IaC collection, in sequence order
    ///
    /// Each record lands in exactly one map: `by_id` if it has a non-null
    /// id, else `by_name` if it has a non-null name, else `by_position`
    /// under a synthetic `_index_<i>` key. Duplicate keys within a map
    /// overwrite (last one wins) and are logged, never an error.
    pub fn build(declared: &'a [Value]) -> Self {
        let mut by_id: HashMap<String, &'a Value> = HashMap::new();
        let mut by_name: HashMap<String, &'a Value> = HashMap::new();
        let mut by_position: HashMap<String, &'a Value> = HashMap::new();

        for (idx, resource) in declared.iter().enumerate() {
            if let Some(key) = field_key(resource, ID_FIELD) {
                if by_id.insert(key.clone(), resource).is_some() {
                    warn!(
                        "Duplicate IaC resource id '{}' - later entry overwrites earlier one",
                        key
                    );
                }
            } else if let Some(key) = field_key(resource, NAME_FIELD) {
                if by_name.insert(key.clone(), resource).is_some() {
                    warn!(
                        "Duplicate IaC resource name '{}' - later entry overwrites earlier one",
                        key
                    );
                }
            } else {
                by_position.insert(positional_key(idx), resource);
            }
        }

        Self {
            by_id,
            by_name,
            by_position,
        }
    }

    /// Find the IaC counterpart for one observed cloud resource
    ///
    /// Lookup is a strict priority chain: id first, then name, then the
    /// observed record's position against the positional fallback map.
    /// A present-but-unmatched id does NOT fall through to name matching -
    /// that would let a renamed-and-reassigned resource silently match the
    /// wrong counterpart. Name is only tried when the id is absent or null.
    pub fn find_match(&self, observed: &Value, position: usize) -> Option<&'a Value> {
        if let Some(id) = field_key(observed, ID_FIELD) {
            if let Some(found) = self.by_id.get(&id).copied() {
                return Some(found);
            }
        } else if let Some(name) = field_key(observed, NAME_FIELD) {
            if let Some(found) = self.by_name.get(&name).copied() {
                return Some(found);
            }
        }

        self.by_position.get(&positional_key(position)).copied()
    }
}

/// Extract a non-null lookup key from a record field
///
/// String values key by their raw contents; other non-null values key by
/// their compact JSON rendering so numeric identifiers still index
/// deterministically.
fn field_key(record: &Value, field: &str) -> Option<String> {
    match record.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn positional_key(position: usize) -> String {
    format!("{}{}", POSITIONAL_KEY_PREFIX, position)
}
