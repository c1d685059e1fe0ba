//! List command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the list command
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Output format for the registry table
    pub format: OutputFormat,
    /// Optional TOML tool settings file
    pub settings_path: Option<PathBuf>,
}

impl ListConfig {
    pub fn new(format: OutputFormat, settings_path: Option<PathBuf>) -> Self {
        Self {
            format,
            settings_path,
        }
    }
}
