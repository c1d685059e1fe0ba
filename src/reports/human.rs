//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::Selection;
use crate::error::ReporterError;
use crate::registry::Registry;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn selection_report(
        &self,
        file_type: &str,
        selection: &Selection,
    ) -> Result<String, ReporterError> {
        let mut output = String::new();
        let names = selection.reporter_names();

        if selection.is_composite() {
            writeln!(
                output,
                "{} {} → {} {}:",
                style("🔎").cyan(),
                style(file_type).bold(),
                style(names.len()).yellow(),
                pluralize("reporter", names.len())
            )?;
            for name in &names {
                writeln!(output, "    {} {}", style("•").dim(), style(name).yellow())?;
            }
        } else {
            writeln!(
                output,
                "{} {} → {}",
                style("🔎").cyan(),
                style(file_type).bold(),
                style(names.join(", ")).yellow()
            )?;
        }

        writeln!(
            output,
            "  {} chosen by {}",
            style("→").dim(),
            selection.source
        )?;
        Ok(output)
    }

    fn registry_report(&self, registry: &Registry) -> Result<String, ReporterError> {
        let mut output = String::new();
        let entries = registry.entries();

        writeln!(
            output,
            "{} {} {}:",
            style("📋").blue(),
            style(entries.len()).bold(),
            pluralize("file type", entries.len())
        )?;

        let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, descriptor) in entries {
            writeln!(
                output,
                "  {} {:<width$}  {}",
                style("•").dim(),
                key,
                style(descriptor.name()).yellow()
            )?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;

    use super::*;
    use crate::config::ToolSettings;
    use crate::core::{MarkerSite, ReporterDescriptor, ResolutionSource};
    use crate::reporters::QuietReporter;

    #[test]
    fn test_single_selection() {
        let selection = Selection {
            source: ResolutionSource::FileType {
                key: "txt".to_string(),
            },
            reporters: vec![ReporterDescriptor::of::<QuietReporter>("diff")],
        };

        let report = HumanReportGenerator::new()
            .selection_report("txt", &selection)
            .unwrap();
        let plain = strip_ansi_codes(&report);
        assert!(plain.contains("txt → diff"));
        assert!(plain.contains("chosen by file type 'txt'"));
    }

    #[test]
    fn test_composite_selection_lists_members() {
        let selection = Selection {
            source: ResolutionSource::Override {
                frame: "approval-report::which".to_string(),
                site: MarkerSite::Method,
            },
            reporters: vec![
                ReporterDescriptor::of::<QuietReporter>("diff"),
                ReporterDescriptor::of::<QuietReporter>("quiet"),
            ],
        };

        let report = HumanReportGenerator::new()
            .selection_report("png", &selection)
            .unwrap();
        let plain = strip_ansi_codes(&report);
        assert!(plain.contains("png → 2 reporters:"));
        assert!(plain.contains("• diff"));
        assert!(plain.contains("• quiet"));
        assert!(plain.contains("method override on approval-report::which"));
    }

    #[test]
    fn test_registry_report() {
        let registry = Registry::with_settings(&ToolSettings::default());
        let report = HumanReportGenerator::new()
            .registry_report(&registry)
            .unwrap();
        let plain = strip_ansi_codes(&report);

        assert!(plain.contains("6 file types:"));
        assert!(plain.contains("png      image"));
        assert!(plain.contains("default  quiet"));
    }
}
