//! Image comparison reporting

use std::path::Path;

use super::{FileLauncherReporter, Reporter, ToolCommand};
use crate::config::ToolSettings;
use crate::constants::reporters::IMAGE;
use crate::constants::tools::IMAGE_CANDIDATES;
use crate::error::ReporterError;

/// Shows both images in a comparison tool, or opens the received image
#[derive(Debug, Clone)]
pub struct ImageReporter {
    tool: Option<ToolCommand>,
    launcher: FileLauncherReporter,
}

impl ImageReporter {
    pub fn new(tool: Option<ToolCommand>, launcher: FileLauncherReporter) -> Self {
        Self { tool, launcher }
    }

    pub fn from_settings(settings: &ToolSettings) -> Result<Self, ReporterError> {
        let tool = match &settings.image_tool {
            Some(tool) => {
                tool.locate()?;
                Some(tool.clone())
            }
            None => ToolCommand::discover(IMAGE_CANDIDATES),
        };
        Ok(Self::new(tool, FileLauncherReporter::from_settings(settings)?))
    }

    pub fn tool(&self) -> Option<&ToolCommand> {
        self.tool.as_ref()
    }
}

impl Reporter for ImageReporter {
    fn name(&self) -> &str {
        IMAGE
    }

    fn report(&self, received: &Path, approved: &Path) -> Result<(), ReporterError> {
        match &self.tool {
            Some(tool) => tool.run(&[received, approved]),
            None => self.launcher.report(received, approved),
        }
    }
}
