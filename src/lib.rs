//! IaC Drift
//!
//! Configuration drift detection between deployed cloud resources
//! and IaC declarations.
//!
//! This crate provides the core implementation for the
//! `iac-drift` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install iac-drift
//! iac-drift --help
//! ```

pub mod analyzer;
pub mod commands;
pub mod output;
pub mod utils;
