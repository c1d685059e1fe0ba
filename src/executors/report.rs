//! Report command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::{ReportConfig, ResolverConfig, ToolSettings};
use crate::executors::{CommandExecutor, enter_overrides};
use crate::registry::Registry;
use crate::reporters::{MultiReporter, Reporter, downcast_ref};
use crate::resolver::Resolver;

pub struct ReportExecutor;

impl CommandExecutor for ReportExecutor {
    type Config = ReportConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let settings = ToolSettings::load(config.settings_path.as_deref())
            .wrap_err("Failed to load tool settings")?;
        let registry = Registry::with_settings(&settings);
        let _overrides = enter_overrides("report", &config.reporters, &settings)?;

        let file_type = config.effective_file_type();
        let reporter = Resolver::new(&registry, ResolverConfig::default())
            .resolve(&file_type)
            .wrap_err_with(|| format!("Failed to resolve a reporter for '{file_type}'"))?;

        eprintln!(
            "{} Reporting {} with {}",
            style("🔎").cyan(),
            style(config.received.display()).bold(),
            style(describe(reporter.as_ref())).yellow()
        );

        reporter
            .report(&config.received, &config.approved)
            .wrap_err_with(|| format!("Reporter '{}' failed", reporter.name()))?;

        Ok(())
    }
}

fn describe(reporter: &dyn Reporter) -> String {
    match downcast_ref::<MultiReporter>(reporter) {
        Some(multi) => multi
            .reporters()
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(" + "),
        None => reporter.name().to_string(),
    }
}
