//! JSON format report generation

use serde_json::{Value, json};

use super::ReportGenerator;
use crate::core::{ResolutionSource, Selection};
use crate::error::ReporterError;
use crate::registry::Registry;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn source_json(source: &ResolutionSource) -> Value {
    match source {
        ResolutionSource::Override { frame, site } => json!({
            "kind": "override",
            "frame": frame,
            "site": site.to_string(),
        }),
        ResolutionSource::FileType { key } => json!({
            "kind": "file-type",
            "key": key,
        }),
        ResolutionSource::Fallback => json!({ "kind": "fallback" }),
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn selection_report(
        &self,
        file_type: &str,
        selection: &Selection,
    ) -> Result<String, ReporterError> {
        let report = json!({
            "file_type": file_type,
            "reporters": selection.reporter_names(),
            "composite": selection.is_composite(),
            "source": source_json(&selection.source),
        });

        Ok(serde_json::to_string_pretty(&report)? + "\n")
    }

    fn registry_report(&self, registry: &Registry) -> Result<String, ReporterError> {
        let entries: Vec<_> = registry
            .entries()
            .into_iter()
            .map(|(key, descriptor)| {
                json!({
                    "file_type": key,
                    "reporter": descriptor.name(),
                })
            })
            .collect();

        let report = json!({
            "entries": entries,
            "fallback": registry.fallback().name(),
        });

        Ok(serde_json::to_string_pretty(&report)? + "\n")
    }
}
