//! Report generation modules for CLI output
//!
//! This module contains report generators for the CLI output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::core::Selection;
use crate::error::ReporterError;
use crate::registry::Registry;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Describe the reporters chosen for `file_type`
    fn selection_report(
        &self,
        file_type: &str,
        selection: &Selection,
    ) -> Result<String, ReporterError>;

    /// Describe the default reporter of every registered file type
    fn registry_report(&self, registry: &Registry) -> Result<String, ReporterError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
