//! Which command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::WhichConfig;
use crate::error::ReporterError;

impl FromCommand for WhichConfig {
    fn from_command(command: Commands) -> Result<Self, ReporterError> {
        match command {
            Commands::Which {
                file_type,
                overrides,
                format,
                settings,
            } => WhichConfig::builder()
                .with_file_type(file_type)
                .with_reporters(overrides.reporters)
                .with_format(format.format)
                .with_settings_path(settings.config)
                .build(),
            _ => Err(ReporterError::ConfigurationError {
                message: "Invalid command type for WhichConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(WhichConfig);

/// Execute the which command
pub fn execute_which_command(command: Commands) -> Result<()> {
    let config = WhichConfig::from_command(command)
        .wrap_err("Failed to parse which command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::which::WhichExecutor;
    WhichExecutor::execute(config)
}
