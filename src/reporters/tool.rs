//! External programs launched by reporters

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::ReporterError;

/// A program plus the arguments that precede the file paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a whitespace-separated command line such as `code --wait --diff`
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    fn from_candidate(&(program, args): &(&str, &[&str])) -> Self {
        Self::new(program, args.iter().copied())
    }

    /// The first candidate installed on `PATH`
    pub fn discover(candidates: &[(&str, &[&str])]) -> Option<Self> {
        candidates
            .iter()
            .map(Self::from_candidate)
            .find(|tool| which::which(&tool.program).is_ok())
    }

    /// Platform default for opening a file with its associated viewer
    pub fn platform_launcher() -> Self {
        Self::from_candidate(&crate::constants::tools::PLATFORM_LAUNCHER)
    }

    pub fn locate(&self) -> Result<PathBuf, ReporterError> {
        which::which(&self.program).map_err(|source| ReporterError::ToolNotFound {
            tool: self.program.clone(),
            source,
        })
    }

    pub fn command(&self, files: &[&Path]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).args(files);
        command
    }

    /// Launch the tool and wait for it to exit
    ///
    /// Diff tools commonly exit non-zero when the inputs differ, so a failing
    /// status is logged rather than returned.
    pub fn run(&self, files: &[&Path]) -> Result<(), ReporterError> {
        debug!(tool = %self, "launching external tool");
        let status = self
            .command(files)
            .status()
            .map_err(|source| ReporterError::LaunchFailed {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(tool = %self, %status, "external tool exited unsuccessfully");
        }
        Ok(())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
