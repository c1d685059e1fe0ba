//! Opens the received file with an external viewer

use std::path::Path;

use super::{Reporter, ToolCommand};
use crate::config::ToolSettings;
use crate::constants::reporters::FILE_LAUNCHER;
use crate::error::ReporterError;

#[derive(Debug, Clone)]
pub struct FileLauncherReporter {
    launcher: ToolCommand,
}

impl Default for FileLauncherReporter {
    fn default() -> Self {
        Self::new(ToolCommand::platform_launcher())
    }
}

impl FileLauncherReporter {
    pub fn new(launcher: ToolCommand) -> Self {
        Self { launcher }
    }

    pub fn from_settings(settings: &ToolSettings) -> Result<Self, ReporterError> {
        match &settings.launcher {
            Some(launcher) => {
                launcher.locate()?;
                Ok(Self::new(launcher.clone()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn launcher(&self) -> &ToolCommand {
        &self.launcher
    }
}

impl Reporter for FileLauncherReporter {
    fn name(&self) -> &str {
        FILE_LAUNCHER
    }

    fn report(&self, received: &Path, _approved: &Path) -> Result<(), ReporterError> {
        self.launcher.run(&[received])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_platform_launcher() {
        let reporter = FileLauncherReporter::from_settings(&ToolSettings::default()).unwrap();
        assert_eq!(reporter.launcher(), &ToolCommand::platform_launcher());
    }

    #[test]
    fn test_configured_launcher_must_exist() {
        let settings = ToolSettings {
            launcher: ToolCommand::parse("approval-reporters-no-such-viewer"),
            ..ToolSettings::default()
        };
        assert!(matches!(
            FileLauncherReporter::from_settings(&settings),
            Err(ReporterError::ToolNotFound { .. })
        ));
    }
}
