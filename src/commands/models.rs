use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Cloud (observed) resources JSON
    pub cloud_file: PathBuf,

    /// IaC (declared) resources JSON
    pub iac_file: PathBuf,

    /// Output path for the drift report JSON
    pub output_file: PathBuf,

    /// Print a human-readable summary to the terminal
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            cloud_file: PathBuf::from("cloud.json"),
            iac_file: PathBuf::from("iac.json"),
            output_file: PathBuf::from("report.json"),
            print_summary: false,
        }
    }
}
