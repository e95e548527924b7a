//! Core analysis engine.
//! Matches every cloud resource to its IaC counterpart and diffs the pairs.

use log::debug;
use serde_json::Value;

use super::index::ResourceIndex;
use super::schema::{value_kind, Difference, ReportEntry, ResourceState};
use super::AnalyzeError;

/// Run the full drift analysis
///
/// Builds the IaC lookup index once, then produces exactly one report entry
/// per cloud resource, in the cloud collection's order.
///
/// # Arguments
/// * `observed` - Cloud (observed) resource collection
/// * `declared` - IaC (declared) resource collection
///
/// # Errors
/// * `AnalyzeError::InvalidInputKind` - If either collection contains a
///   value that is not a record-like mapping
///
/// # Example
/// ```ignore
/// let cloud = read_resources("cloud.json")?;
/// let iac = read_resources("iac.json")?;
/// let report = analyze(&cloud, &iac)?;
/// ```
pub fn analyze<'a>(
    observed: &'a [Value],
    declared: &'a [Value],
) -> Result<Vec<ReportEntry<'a>>, AnalyzeError> {
    check_records(observed, "cloud")?;
    check_records(declared, "iac")?;

    let index = ResourceIndex::build(declared);
    debug!("Indexed {} IaC resources", declared.len());

    let report = observed
        .iter()
        .enumerate()
        .map(|(position, resource)| analyze_resource(resource, position, &index))
        .collect();

    Ok(report)
}

/// Classify one cloud resource against the index
///
/// Every resource takes exactly one path: no counterpart -> `Missing`;
/// counterpart with no differences -> `Match`; otherwise -> `Modified`
/// with the differences in the change log.
fn analyze_resource<'a>(
    observed: &'a Value,
    position: usize,
    index: &ResourceIndex<'a>,
) -> ReportEntry<'a> {
    match index.find_match(observed, position) {
        None => ReportEntry {
            cloud_resource_item: observed,
            iac_resource_item: None,
            state: ResourceState::Missing,
            change_log: Vec::new(),
        },
        Some(declared) => {
            let change_log = compare_values("", Some(observed), Some(declared));
            let state = if change_log.is_empty() {
                ResourceState::Match
            } else {
                ResourceState::Modified
            };

            ReportEntry {
                cloud_resource_item: observed,
                iac_resource_item: Some(declared),
                state,
                change_log,
            }
        }
    }
}

/// The core failure class: a collection entry that is not a mapping
fn check_records(collection: &[Value], side: &'static str) -> Result<(), AnalyzeError> {
    for (index, record) in collection.iter().enumerate() {
        if !record.is_object() {
            return Err(AnalyzeError::InvalidInputKind {
                side,
                index,
                kind: value_kind(record),
            });
        }
    }
    Ok(())
}

/// Recursively diff two values, producing one difference per differing leaf
///
/// `None` marks a side on which the value is absent (a key or index that
/// exists only on the other side). Absent renders as `null` in the output
/// but is not equal to an explicit `null` value.
///
/// The root call uses an empty path prefix, so the first segment carries no
/// leading separator.
pub fn compare_values(
    path_prefix: &str,
    observed: Option<&Value>,
    declared: Option<&Value>,
) -> Vec<Difference> {
    let mut changes = Vec::new();
    compare_into(path_prefix, observed, declared, &mut changes);
    changes
}

fn compare_into(
    path: &str,
    observed: Option<&Value>,
    declared: Option<&Value>,
    changes: &mut Vec<Difference>,
) {
    match (observed, declared) {
        (Some(Value::Object(cloud)), Some(Value::Object(iac))) => {
            // Union of keys: cloud's in insertion order, then keys unique
            // to the IaC side in its order
            let mut keys: Vec<&str> = cloud.keys().map(String::as_str).collect();
            keys.extend(
                iac.keys()
                    .map(String::as_str)
                    .filter(|key| !cloud.contains_key(*key)),
            );

            for key in keys {
                let child = join_key(path, key);
                compare_into(&child, cloud.get(key), iac.get(key), changes);
            }
        }

        (Some(Value::Array(cloud)), Some(Value::Array(iac))) => {
            // Strictly positional: reordered elements count as differences
            for i in 0..cloud.len().max(iac.len()) {
                let child = format!("{}[{}]", path, i);
                compare_into(&child, cloud.get(i), iac.get(i), changes);
            }
        }

        _ => {
            // Primitives, mismatched container kinds, and one-sided values.
            // Equality is exact in both value and type.
            if observed != declared {
                changes.push(Difference {
                    key_name: path.to_string(),
                    cloud_value: observed.cloned().unwrap_or(Value::Null),
                    iac_value: declared.cloned().unwrap_or(Value::Null),
                });
            }
        }
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn diff(observed: Value, declared: Value) -> Vec<Difference> {
        compare_values("", Some(&observed), Some(&declared))
    }

    #[test]
    fn test_equal_primitives_yield_nothing() {
        assert!(diff(json!(true), json!(true)).is_empty());
        assert!(diff(json!("a"), json!("a")).is_empty());
        assert!(diff(json!(null), json!(null)).is_empty());
    }

    #[test]
    fn test_type_sensitive_equality() {
        let changes = diff(json!(true), json!("true"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].cloud_value, json!(true));
        assert_eq!(changes[0].iac_value, json!("true"));
    }

    #[test]
    fn test_nested_path() {
        let changes = diff(
            json!({"tags": {"Owner": "A"}}),
            json!({"tags": {"Owner": "B"}}),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "tags.Owner");
        assert_eq!(changes[0].cloud_value, json!("A"));
        assert_eq!(changes[0].iac_value, json!("B"));
    }

    #[test]
    fn test_array_positions_in_path() {
        let changes = diff(
            json!({"subnets": [{"cidr_block": "10.0.1.0/24"}]}),
            json!({"subnets": [{"cidr_block": "10.0.2.0/24"}]}),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "subnets[0].cidr_block");
    }

    #[test]
    fn test_reordered_array_is_two_differences() {
        let changes = diff(json!({"subnets": ["a", "b"]}), json!({"subnets": ["b", "a"]}));
        let paths: Vec<&str> = changes.iter().map(|c| c.key_name.as_str()).collect();
        assert_eq!(paths, vec!["subnets[0]", "subnets[1]"]);
    }

    #[test]
    fn test_array_length_mismatch() {
        let changes = diff(json!({"ports": [80]}), json!({"ports": [80, 443]}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "ports[1]");
        assert_eq!(changes[0].cloud_value, json!(null));
        assert_eq!(changes[0].iac_value, json!(443));
    }

    #[test]
    fn test_missing_key_expansion() {
        let changes = diff(json!({"a": 1}), json!({}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "a");
        assert_eq!(changes[0].cloud_value, json!(1));
        assert_eq!(changes[0].iac_value, json!(null));
    }

    #[test]
    fn test_absent_differs_from_explicit_null() {
        // One side has no key at all, the other has the key set to null
        let changes = diff(json!({}), json!({"a": null}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "a");
        assert_eq!(changes[0].cloud_value, json!(null));
        assert_eq!(changes[0].iac_value, json!(null));
    }

    #[test]
    fn test_mismatched_container_kinds_is_one_difference() {
        let changes = diff(json!({"cfg": {"a": 1}}), json!({"cfg": [1]}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "cfg");
        assert_eq!(changes[0].cloud_value, json!({"a": 1}));
        assert_eq!(changes[0].iac_value, json!([1]));
    }

    #[test]
    fn test_union_key_order() {
        // Cloud keys first in insertion order, then IaC-only keys
        let changes = diff(
            json!({"b": 1, "a": 2}),
            json!({"c": 3, "a": 9, "b": 8}),
        );
        let paths: Vec<&str> = changes.iter().map(|c| c.key_name.as_str()).collect();
        assert_eq!(paths, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_deep_nesting() {
        let changes = diff(
            json!({"a": {"b": {"c": {"d": [{"e": 1}]}}}}),
            json!({"a": {"b": {"c": {"d": [{"e": 2}]}}}}),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key_name, "a.b.c.d[0].e");
    }

    #[test]
    fn test_invalid_input_kind_on_cloud_side() {
        let observed = vec![json!("not a record")];
        let declared: Vec<Value> = vec![];
        let err = analyze(&observed, &declared).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::InvalidInputKind {
                side: "cloud",
                index: 0,
                kind: "string",
            }
        ));
    }

    #[test]
    fn test_invalid_input_kind_on_iac_side() {
        let observed = vec![json!({"id": "x"})];
        let declared = vec![json!({"id": "y"}), json!([1, 2])];
        let err = analyze(&observed, &declared).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::InvalidInputKind {
                side: "iac",
                index: 1,
                kind: "array",
            }
        ));
    }
}
