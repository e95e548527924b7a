//! Integration tests for the analyzer module.
//!
//! Tests the complete match-and-compare workflow over in-memory collections.

use super::*;
use serde_json::{json, Value};

/// Helper to build a small cloud-side collection
fn cloud_fleet() -> Vec<Value> {
    vec![
        json!({"id": "vpc-1", "name": "main-vpc", "cidr": "10.0.0.0/16"}),
        json!({"id": "sg-1", "name": "web-sg", "rules": [{"port": 80}, {"port": 443}]}),
        json!({"id": "db-9", "name": "orphan-db"}),
    ]
}

/// Helper to build the matching IaC-side collection
fn iac_fleet() -> Vec<Value> {
    vec![
        json!({"id": "vpc-1", "name": "main-vpc", "cidr": "10.0.0.0/24"}),
        json!({"id": "sg-1", "name": "web-sg", "rules": [{"port": 80}, {"port": 443}]}),
    ]
}

#[test]
fn test_totality_one_entry_per_cloud_resource() {
    let cloud = cloud_fleet();
    let iac = iac_fleet();
    let report = analyze(&cloud, &iac).unwrap();

    assert_eq!(report.len(), cloud.len());
    for (entry, resource) in report.iter().zip(&cloud) {
        assert_eq!(entry.cloud_resource_item, resource);
    }
}

#[test]
fn test_classification_partition() {
    let cloud = cloud_fleet();
    let iac = iac_fleet();
    let report = analyze(&cloud, &iac).unwrap();

    for entry in &report {
        match entry.state {
            ResourceState::Modified => assert!(!entry.change_log.is_empty()),
            ResourceState::Match | ResourceState::Missing => {
                assert!(entry.change_log.is_empty())
            }
        }
    }

    assert_eq!(report[0].state, ResourceState::Modified);
    assert_eq!(report[1].state, ResourceState::Match);
    assert_eq!(report[2].state, ResourceState::Missing);
}

#[test]
fn test_end_to_end_modified_scenario() {
    let cloud = vec![json!({"id": "vpc-1", "cidr": "10.0.0.0/16"})];
    let iac = vec![json!({"id": "vpc-1", "cidr": "10.0.0.0/24"})];
    let report = analyze(&cloud, &iac).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].state, ResourceState::Modified);
    assert_eq!(
        report[0].change_log,
        vec![Difference {
            key_name: "cidr".to_string(),
            cloud_value: json!("10.0.0.0/16"),
            iac_value: json!("10.0.0.0/24"),
        }]
    );
}

#[test]
fn test_end_to_end_missing_scenario() {
    let cloud = vec![json!({"id": "vpc-9"})];
    let iac: Vec<Value> = vec![];
    let report = analyze(&cloud, &iac).unwrap();

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].state, ResourceState::Missing);
    assert!(report[0].change_log.is_empty());
    assert!(report[0].iac_resource_item.is_none());
}

#[test]
fn test_matching_priority_id_beats_name() {
    // The first IaC record's name equals the second's id; an observed
    // record with that id must match by id, never by name
    let cloud = vec![json!({"id": "x"})];
    let iac = vec![
        json!({"name": "x", "origin": "by-name"}),
        json!({"id": "x", "origin": "by-id"}),
    ];
    let report = analyze(&cloud, &iac).unwrap();

    let matched = report[0].iac_resource_item.unwrap();
    assert_eq!(matched["origin"], json!("by-id"));
}

#[test]
fn test_empty_collections() {
    let cloud: Vec<Value> = vec![];
    let iac: Vec<Value> = vec![];
    let report = analyze(&cloud, &iac).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_duplicate_declared_id_resolves_to_later_record() {
    let cloud = vec![json!({"id": "dup", "cidr": "10.1.0.0/16"})];
    let iac = vec![
        json!({"id": "dup", "cidr": "10.0.0.0/16"}),
        json!({"id": "dup", "cidr": "10.1.0.0/16"}),
    ];
    let report = analyze(&cloud, &iac).unwrap();

    // Last write wins, so the pair is identical
    assert_eq!(report[0].state, ResourceState::Match);
}

#[test]
fn test_analyze_is_deterministic() {
    let cloud = cloud_fleet();
    let iac = iac_fleet();

    let first = serde_json::to_string(&analyze(&cloud, &iac).unwrap()).unwrap();
    let second = serde_json::to_string(&analyze(&cloud, &iac).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_summary_mentions_counts() {
    let cloud = cloud_fleet();
    let iac = iac_fleet();
    let report = analyze(&cloud, &iac).unwrap();

    let summary = render_summary(&report);
    assert!(summary.contains("3 total"));
    assert!(summary.contains("orphan-db"));
    assert!(summary.contains("cidr"));
}
