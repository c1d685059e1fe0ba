//! External tool settings for the built-in reporters
//!
//! Settings are layered: built-in discovery, then an optional TOML file,
//! then the `APPROVAL_*` environment variables.
//!
//! A string value is split on whitespace, in the file and the environment
//! alike. Programs whose path contains spaces must use the table form.
//!
//! ```toml
//! [tools]
//! diff = "code --wait --diff"
//! image = { program = "/opt/Beyond Compare/bcompare", args = ["-solo"] }
//! launcher = "xdg-open"
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::constants::env;
use crate::error::{ReporterError, TomlParseError};
use crate::reporters::ToolCommand;

/// Programs the built-in reporters launch; `None` means discover on `PATH`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSettings {
    pub diff_tool: Option<ToolCommand>,
    pub image_tool: Option<ToolCommand>,
    pub launcher: Option<ToolCommand>,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    tools: Option<ToolsTable>,
}

#[derive(Debug, Deserialize)]
struct ToolsTable {
    diff: Option<ToolSpec>,
    image: Option<ToolSpec>,
    launcher: Option<ToolSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ToolSpec {
    Simple(String),
    Detailed {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl ToolSpec {
    fn into_command(self) -> Option<ToolCommand> {
        match self {
            ToolSpec::Simple(line) => ToolCommand::parse(&line),
            ToolSpec::Detailed { program, args } => Some(ToolCommand::new(program, args)),
        }
    }
}

impl ToolSettings {
    /// Settings taken from the environment only
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// File settings (if any) overlaid with the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ReporterError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ReporterError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ReporterError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, file_name: &str) -> Result<Self, ReporterError> {
        let file: SettingsFile = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            ReporterError::TomlParseError(Box::new(TomlParseError {
                file: file_name.to_string(),
                source_code: NamedSource::new(file_name, content.to_string()),
                span,
                source: e,
            }))
        })?;

        let Some(tools) = file.tools else {
            return Ok(Self::default());
        };
        Ok(Self {
            diff_tool: tools.diff.and_then(ToolSpec::into_command),
            image_tool: tools.image.and_then(ToolSpec::into_command),
            launcher: tools.launcher.and_then(ToolSpec::into_command),
        })
    }

    /// Overlay values found through `lookup`; blank values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            let tool = lookup(key).as_deref().and_then(ToolCommand::parse);
            if let Some(tool) = &tool {
                debug!(variable = key, %tool, "tool configured from environment");
            }
            tool
        };

        if let Some(tool) = read(env::DIFF_TOOL) {
            self.diff_tool = Some(tool);
        }
        if let Some(tool) = read(env::IMAGE_TOOL) {
            self.image_tool = Some(tool);
        }
        if let Some(tool) = read(env::LAUNCHER) {
            self.launcher = Some(tool);
        }
        self
    }
}
