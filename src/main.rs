//! IaC Drift CLI
//!
//! Detects configuration drift between deployed cloud resources and
//! IaC declarations. Produces a per-resource report with a field-level
//! change log.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use iac_drift::commands::{execute_analyze, validate_args, AnalyzeArgs};
use iac_drift::utils::config::{ID_FIELD, NAME_FIELD};

/// IaC Drift - Configuration drift detection for cloud resources
#[derive(Parser, Debug)]
#[command(name = "iac-drift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare cloud resources against IaC declarations
    Analyze {
        /// Cloud (observed) resources JSON
        #[arg(short, long, default_value = "cloud.json")]
        cloud: PathBuf,

        /// IaC (declared) resources JSON
        #[arg(short, long, default_value = "iac.json")]
        iac: PathBuf,

        /// Output path for the drift report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Print a human-readable summary to stdout
        #[arg(short, long)]
        summary: bool,
    },

    /// Validate a resources JSON file
    Validate {
        /// Path to resources JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            cloud,
            iac,
            output,
            summary,
        } => {
            let args = AnalyzeArgs {
                cloud_file: cloud,
                iac_file: iac,
                output_file: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute analysis
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_resource_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a resources JSON file
///
/// **Private** - internal command implementation
fn validate_resource_file(file_path: PathBuf) -> Result<()> {
    use iac_drift::output::read_resources;

    println!("Validating resources: {}", file_path.display());

    let resources = read_resources(&file_path)?;

    let with_id = resources
        .iter()
        .filter(|r| r.get(ID_FIELD).map_or(false, |v| !v.is_null()))
        .count();
    let with_name = resources
        .iter()
        .filter(|r| r.get(NAME_FIELD).map_or(false, |v| !v.is_null()))
        .count();

    println!("✓ Valid resource collection");
    println!("  Resources: {}", resources.len());
    println!("  With id:   {}", with_id);
    println!("  With name: {}", with_name);

    if with_id + with_name < resources.len() {
        println!("  Note: resources without id or name match by position only");
    }

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("IaC Drift Report Schema");
    println!();

    if show_details {
        println!("Report Structure (array of entries, one per cloud resource):");
        println!("  CloudResourceItem: object - The observed cloud resource, verbatim");
        println!("  IacResourceItem: object?  - Matched IaC declaration (null if unmatched)");
        println!("  State: string             - One of 'Match', 'Modified', 'Missing'");
        println!("  ChangeLog: array          - Field-level differences (Modified only)");
        println!("    KeyName: string         - Path to the differing value, e.g. tags.Owner");
        println!("    CloudValue: any         - Value on the cloud side (null when absent)");
        println!("    IacValue: any           - Value on the IaC side (null when absent)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("IaC Drift v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration drift detection between cloud resources and IaC declarations.");
}
