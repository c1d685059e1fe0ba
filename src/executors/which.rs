//! Which command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::{ResolverConfig, ToolSettings, WhichConfig};
use crate::executors::{CommandExecutor, enter_overrides};
use crate::registry::Registry;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::resolver::Resolver;

pub struct WhichExecutor;

impl CommandExecutor for WhichExecutor {
    type Config = WhichConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let settings = ToolSettings::load(config.settings_path.as_deref())
            .wrap_err("Failed to load tool settings")?;
        let registry = Registry::with_settings(&settings);
        let _overrides = enter_overrides("which", &config.reporters, &settings)?;

        let selection = Resolver::new(&registry, ResolverConfig::default())
            .select(&config.file_type)
            .wrap_err_with(|| format!("Failed to resolve a reporter for '{}'", config.file_type))?;

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new().selection_report(&config.file_type, &selection)
            }
            OutputFormat::Json => {
                JsonReportGenerator::new().selection_report(&config.file_type, &selection)
            }
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");
        Ok(())
    }
}
