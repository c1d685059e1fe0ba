//! List command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::ListConfig;
use crate::error::ReporterError;

impl FromCommand for ListConfig {
    fn from_command(command: Commands) -> Result<Self, ReporterError> {
        match command {
            Commands::List { format, settings } => {
                Ok(ListConfig::new(format.format, settings.config))
            }
            _ => Err(ReporterError::ConfigurationError {
                message: "Invalid command type for ListConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ListConfig);

/// Execute the list command
pub fn execute_list_command(command: Commands) -> Result<()> {
    let config =
        ListConfig::from_command(command).wrap_err("Failed to parse list command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::list::ListExecutor;
    ListExecutor::execute(config)
}
