//! Default reporter per file type
//!
//! The built-in table is closed: adding a file type is an edit to
//! [`Registry::with_settings`], not a runtime operation.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::ToolSettings;
use crate::constants::file_types;
use crate::core::ReporterDescriptor;
use crate::error::ReporterError;
use crate::reporters::{
    diff_descriptor, file_launcher_descriptor, image_descriptor, quiet_descriptor,
};

static BUILTIN: Lazy<Registry> =
    Lazy::new(|| Registry::with_settings(&ToolSettings::from_env()));

/// Maps file-type identifiers to their default reporter
///
/// The reserved [`file_types::DEFAULT`] key always has an entry, so the
/// fallback lookup cannot miss.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: HashMap<String, ReporterDescriptor>,
    fallback: ReporterDescriptor,
}

impl Registry {
    /// The process-wide table, built once from the environment's tool settings
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// The built-in table using the given tool settings
    pub fn with_settings(settings: &ToolSettings) -> Registry {
        let diff = diff_descriptor(settings);
        let launcher = file_launcher_descriptor(settings);

        let mut entries = HashMap::new();
        entries.insert(file_types::TEXT.to_string(), diff.clone());
        entries.insert(file_types::HTML.to_string(), diff);
        entries.insert(file_types::EXCEL.to_string(), launcher.clone());
        entries.insert(file_types::FILE.to_string(), launcher);
        entries.insert(file_types::IMAGE.to_string(), image_descriptor(settings));

        Registry {
            entries,
            fallback: quiet_descriptor(),
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The descriptor registered for `file_type`, if any
    pub fn get(&self, file_type: &str) -> Option<&ReporterDescriptor> {
        if file_type == file_types::DEFAULT {
            return Some(&self.fallback);
        }
        self.entries.get(file_type)
    }

    /// The descriptor under the reserved default key
    pub fn fallback(&self) -> &ReporterDescriptor {
        &self.fallback
    }

    /// All entries sorted by key, with the default key last
    pub fn entries(&self) -> Vec<(&str, &ReporterDescriptor)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, descriptor)| (key.as_str(), descriptor))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.push((file_types::DEFAULT, &self.fallback));
        entries
    }
}

/// Builder for custom registries
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, ReporterDescriptor>,
    fallback: Option<ReporterDescriptor>,
}

impl RegistryBuilder {
    /// Register `descriptor` for `file_type`; the default key sets the fallback
    pub fn with_entry(
        mut self,
        file_type: impl Into<String>,
        descriptor: ReporterDescriptor,
    ) -> Self {
        let file_type = file_type.into();
        if file_type == file_types::DEFAULT {
            self.fallback = Some(descriptor);
        } else {
            self.entries.insert(file_type, descriptor);
        }
        self
    }

    pub fn with_fallback(self, descriptor: ReporterDescriptor) -> Self {
        self.with_entry(file_types::DEFAULT, descriptor)
    }
}

impl crate::common::ConfigBuilder for RegistryBuilder {
    type Config = Registry;

    fn build(self) -> Result<Self::Config, ReporterError> {
        Ok(Registry {
            entries: self.entries,
            fallback: self.fallback.ok_or_else(|| ReporterError::ConfigurationError {
                message: format!(
                    "Missing required registry entry: '{}'",
                    file_types::DEFAULT
                ),
            })?,
        })
    }
}
