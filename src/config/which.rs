//! Which command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the which command
///
/// Explains which reporter a failure of the given file type would use.
#[derive(Debug, Clone)]
pub struct WhichConfig {
    /// File-type identifier to resolve
    pub file_type: String,
    /// Built-in reporter names acting as a context override
    pub reporters: Vec<String>,
    /// Output format for the explanation
    pub format: OutputFormat,
    /// Optional TOML tool settings file
    pub settings_path: Option<PathBuf>,
}

impl WhichConfig {
    pub fn builder() -> WhichConfigBuilder {
        WhichConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct WhichConfigBuilder {
    file_type: Option<String>,
    reporters: Vec<String>,
    format: Option<OutputFormat>,
    settings_path: Option<PathBuf>,
}

impl WhichConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    pub fn with_reporters(mut self, reporters: Vec<String>) -> Self {
        self.reporters = reporters;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_settings_path(mut self, settings_path: Option<PathBuf>) -> Self {
        self.settings_path = settings_path;
        self
    }
}

impl crate::common::ConfigBuilder for WhichConfigBuilder {
    type Config = WhichConfig;

    fn build(self) -> Result<Self::Config, crate::error::ReporterError> {
        Ok(WhichConfig {
            file_type: self.file_type.ok_or_else(|| {
                crate::error::ReporterError::ConfigurationError {
                    message: "Missing required field: file_type".to_string(),
                }
            })?,
            reporters: self.reporters,
            format: self.format.ok_or_else(|| {
                crate::error::ReporterError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            settings_path: self.settings_path,
        })
    }
}
