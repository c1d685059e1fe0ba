//! List command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::{ListConfig, ToolSettings};
use crate::executors::CommandExecutor;
use crate::registry::Registry;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct ListExecutor;

impl CommandExecutor for ListExecutor {
    type Config = ListConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let settings = ToolSettings::load(config.settings_path.as_deref())
            .wrap_err("Failed to load tool settings")?;
        let registry = Registry::with_settings(&settings);

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().registry_report(&registry),
            OutputFormat::Json => JsonReportGenerator::new().registry_report(&registry),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");
        Ok(())
    }
}
