//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Reporter override arguments
#[derive(Args, Debug, Clone)]
pub struct OverrideArgs {
    /// Use these reporters instead of the file-type default (repeatable)
    #[arg(
        long = "use-reporter",
        value_name = "REPORTER",
        value_delimiter = ',',
        env = "APPROVAL_USE_REPORTERS"
    )]
    pub reporters: Vec<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "APPROVAL_REPORT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Tool settings file arguments
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// TOML file with a [tools] table
    #[arg(long, value_name = "PATH", env = "APPROVAL_REPORT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ReporterError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ReporterError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ReporterError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands, OutputFormat};

    #[test]
    fn test_use_reporter_accepts_lists_and_repeats() {
        let cli = Cli::try_parse_from([
            "approval-report",
            "which",
            "txt",
            "--use-reporter",
            "diff,quiet",
            "--use-reporter",
            "image",
        ])
        .unwrap();

        match cli.command {
            Commands::Which { overrides, format, .. } => {
                assert_eq!(overrides.reporters, vec!["diff", "quiet", "image"]);
                assert_eq!(format.format, OutputFormat::Human);
            }
            _ => panic!("Expected Which command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["approval-report", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
