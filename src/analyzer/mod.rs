//! Drift analysis between cloud resources and IaC declarations.
//!
//! This module compares two resource collections and produces one report
//! entry per cloud resource: a `Match`/`Modified`/`Missing` classification
//! plus a recursive, path-annotated change log for modified pairs.
//!
//! # Example
//! ```ignore
//! use iac_drift::analyzer::analyze;
//! use iac_drift::output::read_resources;
//!
//! let cloud = read_resources("cloud.json")?;
//! let iac = read_resources("iac.json")?;
//! let report = analyze(&cloud, &iac)?;
//! ```

mod engine;
mod index;
mod output;
mod schema;

// Public API exports
pub use engine::{analyze, compare_values};
pub use index::ResourceIndex;
pub use output::render_summary;
pub use schema::{value_kind, Difference, ReportEntry, ResourceState};

// Error type
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Expected a record-like mapping in the {side} collection at index {index}, got {kind}")]
    InvalidInputKind {
        side: &'static str,
        index: usize,
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests;
