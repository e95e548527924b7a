//! File input/output collaborators.

pub mod json;

pub use json::{read_resources, write_report};
