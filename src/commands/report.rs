//! Report command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ReportConfig;
use crate::error::ReporterError;

impl FromCommand for ReportConfig {
    fn from_command(command: Commands) -> Result<Self, ReporterError> {
        match command {
            Commands::Report {
                received,
                approved,
                file_type,
                overrides,
                settings,
            } => ReportConfig::builder()
                .with_received(received)
                .with_approved(approved)
                .with_file_type(file_type)
                .with_reporters(overrides.reporters)
                .with_settings_path(settings.config)
                .build(),
            _ => Err(ReporterError::ConfigurationError {
                message: "Invalid command type for ReportConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ReportConfig);

/// Execute the report command
pub fn execute_report_command(command: Commands) -> Result<()> {
    let config = ReportConfig::from_command(command)
        .wrap_err("Failed to parse report command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::report::ReportExecutor;
    ReportExecutor::execute(config)
}
