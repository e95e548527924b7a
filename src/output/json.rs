//! JSON file collaborators.
//!
//! Reads resource collections and writes drift reports. The analyzer itself
//! never touches the file system; these functions supply and consume the
//! plain in-memory collections it works with.

use crate::analyzer::{value_kind, ReportEntry};
use crate::utils::error::{InputError, OutputError};
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Read a resource collection from a JSON file
///
/// **Public** - input collaborator for the analyze command
///
/// # Arguments
/// * `input_path` - Path to a JSON file holding a top-level array of records
///
/// # Errors
/// * `InputError::ReadFailed` - File cannot be opened
/// * `InputError::ParseFailed` - Invalid JSON
/// * `InputError::NotAnArray` - Top-level value is not an array
pub fn read_resources(input_path: impl AsRef<Path>) -> Result<Vec<Value>, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading resources from: {}", input_path.display());

    let file = File::open(input_path)?;
    let data: Value = serde_json::from_reader(file)?;

    match data {
        Value::Array(resources) => {
            debug!("Loaded {} resources", resources.len());
            Ok(resources)
        }
        other => Err(InputError::NotAnArray {
            path: input_path.display().to_string(),
            kind: value_kind(&other),
        }),
    }
}

/// Write a drift report to a JSON file
///
/// **Public** - output collaborator for the analyze command
///
/// # Arguments
/// * `report` - Report entries to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    report: &[ReportEntry],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
