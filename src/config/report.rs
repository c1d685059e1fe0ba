//! Report command configuration

use std::path::PathBuf;

use crate::constants::file_types;

/// Configuration for the report command
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// File produced by the failing test
    pub received: PathBuf,
    /// Previously approved file
    pub approved: PathBuf,
    /// File-type identifier; derived from the received file when absent
    pub file_type: Option<String>,
    /// Built-in reporter names acting as a context override
    pub reporters: Vec<String>,
    /// Optional TOML tool settings file
    pub settings_path: Option<PathBuf>,
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// The explicit file type, else the received file's extension, else
    /// the generic file key
    pub fn effective_file_type(&self) -> String {
        self.file_type
            .clone()
            .or_else(|| {
                self.received
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_lowercase())
            })
            .unwrap_or_else(|| file_types::FILE.to_string())
    }
}

#[derive(Default)]
pub struct ReportConfigBuilder {
    received: Option<PathBuf>,
    approved: Option<PathBuf>,
    file_type: Option<String>,
    reporters: Vec<String>,
    settings_path: Option<PathBuf>,
}

impl ReportConfigBuilder {
    pub fn with_received(mut self, received: PathBuf) -> Self {
        self.received = Some(received);
        self
    }

    pub fn with_approved(mut self, approved: PathBuf) -> Self {
        self.approved = Some(approved);
        self
    }

    pub fn with_file_type(mut self, file_type: Option<String>) -> Self {
        self.file_type = file_type;
        self
    }

    pub fn with_reporters(mut self, reporters: Vec<String>) -> Self {
        self.reporters = reporters;
        self
    }

    pub fn with_settings_path(mut self, settings_path: Option<PathBuf>) -> Self {
        self.settings_path = settings_path;
        self
    }
}

impl crate::common::ConfigBuilder for ReportConfigBuilder {
    type Config = ReportConfig;

    fn build(self) -> Result<Self::Config, crate::error::ReporterError> {
        Ok(ReportConfig {
            received: self.received.ok_or_else(|| {
                crate::error::ReporterError::ConfigurationError {
                    message: "Missing required field: received".to_string(),
                }
            })?,
            approved: self.approved.ok_or_else(|| {
                crate::error::ReporterError::ConfigurationError {
                    message: "Missing required field: approved".to_string(),
                }
            })?,
            file_type: self.file_type,
            reporters: self.reporters,
            settings_path: self.settings_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn config(received: &str, file_type: Option<&str>) -> ReportConfig {
        ReportConfig::builder()
            .with_received(PathBuf::from(received))
            .with_approved(PathBuf::from("out.approved.txt"))
            .with_file_type(file_type.map(str::to_string))
            .build()
            .unwrap()
    }

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(config("chart.received.PNG", None).effective_file_type(), "png");
    }

    #[test]
    fn test_explicit_file_type_wins() {
        assert_eq!(
            config("chart.received.png", Some("txt")).effective_file_type(),
            "txt"
        );
    }

    #[test]
    fn test_no_extension_means_file() {
        assert_eq!(config("received", None).effective_file_type(), "file");
    }
}
