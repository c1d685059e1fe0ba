//! Reporters that present an approval failure to the developer
//!
//! This module contains the reporter contract and the built-in reporters:
//! - diff: Launches a diff tool, or prints a line diff when none is installed
//! - file_launcher: Opens the received file with the platform viewer
//! - image: Launches an image comparison tool
//! - quiet: Does nothing
//! - multi: Invokes several reporters for the same failure

pub mod diff;
pub mod file_launcher;
pub mod image;
pub mod multi;
pub mod quiet;
pub mod tool;

use std::any::Any;
use std::path::Path;

use crate::config::ToolSettings;
use crate::constants::reporters as names;
use crate::core::ReporterDescriptor;
use crate::error::ReporterError;

/// Common trait for all reporters
pub trait Reporter: Any + Send {
    /// Stable name used in logs and CLI output
    fn name(&self) -> &str;

    /// Present the difference between the received and approved files
    fn report(&self, received: &Path, approved: &Path) -> Result<(), ReporterError>;
}

/// Recover the concrete type behind a resolved reporter
pub fn downcast_ref<R: Reporter>(reporter: &dyn Reporter) -> Option<&R> {
    let any: &dyn Any = reporter;
    any.downcast_ref::<R>()
}

pub fn diff_descriptor(settings: &ToolSettings) -> ReporterDescriptor {
    let settings = settings.clone();
    ReporterDescriptor::new(names::DIFF, move || {
        Ok(Box::new(DiffReporter::from_settings(&settings)?))
    })
}

pub fn file_launcher_descriptor(settings: &ToolSettings) -> ReporterDescriptor {
    let settings = settings.clone();
    ReporterDescriptor::new(names::FILE_LAUNCHER, move || {
        Ok(Box::new(FileLauncherReporter::from_settings(&settings)?))
    })
}

pub fn image_descriptor(settings: &ToolSettings) -> ReporterDescriptor {
    let settings = settings.clone();
    ReporterDescriptor::new(names::IMAGE, move || {
        Ok(Box::new(ImageReporter::from_settings(&settings)?))
    })
}

pub fn quiet_descriptor() -> ReporterDescriptor {
    ReporterDescriptor::of::<QuietReporter>(names::QUIET)
}

/// Descriptor for a built-in reporter, built from the given tool settings
pub fn builtin_descriptor(name: &str, settings: &ToolSettings) -> Option<ReporterDescriptor> {
    match name {
        names::DIFF => Some(diff_descriptor(settings)),
        names::FILE_LAUNCHER => Some(file_launcher_descriptor(settings)),
        names::IMAGE => Some(image_descriptor(settings)),
        names::QUIET => Some(quiet_descriptor()),
        _ => None,
    }
}

/// Look up built-in descriptors by name, preserving the given order
pub fn builtin_descriptors<S: AsRef<str>>(
    requested: &[S],
    settings: &ToolSettings,
) -> Result<Vec<ReporterDescriptor>, ReporterError> {
    requested
        .iter()
        .map(|name| {
            let name = name.as_ref();
            builtin_descriptor(name, settings).ok_or_else(|| ReporterError::ConfigurationError {
                message: format!(
                    "Unknown reporter '{name}' (expected one of: {})",
                    names::BUILTIN.join(", ")
                ),
            })
        })
        .collect()
}

pub use diff::DiffReporter;
pub use file_launcher::FileLauncherReporter;
pub use image::ImageReporter;
pub use multi::MultiReporter;
pub use quiet::QuietReporter;
pub use tool::ToolCommand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast_recovers_concrete_type() {
        let reporter: Box<dyn Reporter> = Box::new(QuietReporter);
        assert!(downcast_ref::<QuietReporter>(&*reporter).is_some());
        assert!(downcast_ref::<MultiReporter>(&*reporter).is_none());
    }

    #[test]
    fn test_every_builtin_name_has_a_descriptor() {
        let settings = ToolSettings::default();
        for name in names::BUILTIN {
            let descriptor = builtin_descriptor(name, &settings).unwrap();
            assert_eq!(descriptor.name(), *name);
        }
    }

    #[test]
    fn test_unknown_builtin_name_is_a_configuration_error() {
        let result = builtin_descriptors(&["quiet", "sparkles"], &ToolSettings::default());
        match result {
            Err(ReporterError::ConfigurationError { message }) => {
                assert!(message.contains("sparkles"));
            }
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_builtin_descriptors_keep_order() {
        let descriptors =
            builtin_descriptors(&["quiet", "diff"], &ToolSettings::default()).unwrap();
        let names: Vec<_> = descriptors.iter().map(ReporterDescriptor::name).collect();
        assert_eq!(names, vec!["quiet", "diff"]);
    }
}
