//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads both resource collections
//! 2. Matches and compares resources
//! 3. Writes the report and prints the result summary

use super::models::AnalyzeArgs;
use crate::analyzer::{analyze, render_summary, ReportEntry, ResourceState};
use crate::output::{read_resources, write_report};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Analyze command arguments
///
/// # Returns
/// Ok if the analysis succeeds, Err with context if any step fails
///
/// # Errors
/// * File read/parse errors
/// * Non-record entries in either collection
/// * Report write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting drift analysis");
    info!("Cloud resources: {}", args.cloud_file.display());
    info!("IaC resources:   {}", args.iac_file.display());

    // Step 1: Load both collections
    info!("Step 1/3: Loading resource collections...");
    let cloud = read_resources(&args.cloud_file).context("Failed to read cloud resources")?;
    let iac = read_resources(&args.iac_file).context("Failed to read IaC resources")?;

    debug!(
        "Loaded {} cloud resources, {} IaC resources",
        cloud.len(),
        iac.len()
    );

    // Step 2: Run the analysis
    info!("Step 2/3: Matching and comparing resources...");
    let report = analyze(&cloud, &iac).context("Failed to analyze resources")?;

    // Step 3: Write the report
    info!("Step 3/3: Writing report...");
    write_report(&report, &args.output_file).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_file.display());

    info!(
        "Analyzed {} resources - {} match, {} modified, {} missing",
        report.len(),
        count_state(&report, ResourceState::Match),
        count_state(&report, ResourceState::Modified),
        count_state(&report, ResourceState::Missing)
    );

    // Print text summary (if requested)
    if args.print_summary {
        println!("{}", render_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

fn count_state(report: &[ReportEntry], state: ResourceState) -> usize {
    report.iter().filter(|entry| entry.state == state).count()
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    validate_input_file(&args.cloud_file)?;
    validate_input_file(&args.iac_file)?;

    if args.output_file.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

/// Validate that the path points to an existing .json file
///
/// **Private** - internal helper for validate_args
fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("Not a file: {}", path.display());
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
        _ => anyhow::bail!("File must be JSON: {}", path.display()),
    }
}
