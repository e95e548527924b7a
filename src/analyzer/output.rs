//! Terminal output rendering for drift reports.
//!
//! Provides human-readable summaries of the analysis with visual cues
//! for modified and missing resources.

use chrono::Utc;
use colored::*;
use serde_json::Value;

use super::schema::{ReportEntry, ResourceState};
use crate::utils::config::{ID_FIELD, NAME_FIELD};

/// Render a human-readable summary of a drift report for the terminal
pub fn render_summary(report: &[ReportEntry]) -> String {
    let mut out = String::new();

    out.push_str(&render_header());
    out.push_str(&render_counts(report));
    out.push_str(&render_modified(report));
    out.push_str(&render_missing(report));

    out
}

fn render_header() -> String {
    let mut out = String::new();
    out.push_str("\n🔍 ");
    out.push_str(&"Drift Analysis Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Generated: {}\n", Utc::now().to_rfc3339()));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_counts(report: &[ReportEntry]) -> String {
    let matched = count_state(report, ResourceState::Match);
    let modified = count_state(report, ResourceState::Modified);
    let missing = count_state(report, ResourceState::Missing);

    format!(
        "Resources: {} total - {} {}, {} {}, {} {}\n",
        report.len(),
        matched,
        "match".green(),
        modified,
        "modified".yellow(),
        missing,
        "missing".red()
    )
}

fn render_modified(report: &[ReportEntry]) -> String {
    let mut out = String::new();

    for entry in report {
        if entry.state != ResourceState::Modified {
            continue;
        }

        out.push_str(&format!(
            "\n  {} {} - {} change(s):\n",
            "⚠".yellow(),
            resource_label(entry.cloud_resource_item).bold(),
            entry.change_log.len()
        ));

        for change in &entry.change_log {
            out.push_str(&format!(
                "    {}: {} -> {}\n",
                change.key_name.cyan(),
                change.cloud_value,
                change.iac_value
            ));
        }
    }

    out
}

fn render_missing(report: &[ReportEntry]) -> String {
    let mut out = String::new();

    for entry in report {
        if entry.state != ResourceState::Missing {
            continue;
        }

        let resource_type = entry
            .cloud_resource_item
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("");

        out.push_str(&format!(
            "\n  {} Missing: {} ({})\n",
            "✗".red(),
            resource_label(entry.cloud_resource_item).bold(),
            resource_type
        ));
    }

    out
}

fn count_state(report: &[ReportEntry], state: ResourceState) -> usize {
    report.iter().filter(|entry| entry.state == state).count()
}

/// Best-effort display label: name, then id, then a placeholder
fn resource_label(resource: &Value) -> String {
    for field in [NAME_FIELD, ID_FIELD] {
        if let Some(Value::String(s)) = resource.get(field) {
            return s.clone();
        }
    }
    "?".to_string()
}
