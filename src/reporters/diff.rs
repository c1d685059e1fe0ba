//! Diff-style reporting for text artifacts

use std::fmt::Write;
use std::io;
use std::path::Path;

use console::{Term, style};
use difference::{Changeset, Difference};

use super::{Reporter, ToolCommand};
use crate::config::ToolSettings;
use crate::constants::reporters::DIFF;
use crate::constants::tools::DIFF_CANDIDATES;
use crate::error::ReporterError;

/// Opens a diff tool, or prints a coloured line diff to stderr
#[derive(Debug, Clone)]
pub struct DiffReporter {
    tool: Option<ToolCommand>,
}

impl DiffReporter {
    pub fn new(tool: Option<ToolCommand>) -> Self {
        Self { tool }
    }

    /// A reporter that always prints the diff instead of launching a tool
    pub fn inline() -> Self {
        Self::new(None)
    }

    /// Use the configured diff tool, or the first candidate found on `PATH`
    ///
    /// A configured tool that is not installed fails construction.
    pub fn from_settings(settings: &ToolSettings) -> Result<Self, ReporterError> {
        match &settings.diff_tool {
            Some(tool) => {
                tool.locate()?;
                Ok(Self::new(Some(tool.clone())))
            }
            None => Ok(Self::new(ToolCommand::discover(DIFF_CANDIDATES))),
        }
    }

    pub fn tool(&self) -> Option<&ToolCommand> {
        self.tool.as_ref()
    }
}

impl Reporter for DiffReporter {
    fn name(&self) -> &str {
        DIFF
    }

    fn report(&self, received: &Path, approved: &Path) -> Result<(), ReporterError> {
        if let Some(tool) = &self.tool {
            return tool.run(&[received, approved]);
        }

        let received_text = read_text(received)?;
        // A missing approved file is the first run of a new test
        let approved_text = match std::fs::read_to_string(approved) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(ReporterError::FileReadError {
                    path: approved.to_path_buf(),
                    source,
                });
            }
        };

        let rendered = render_line_diff(&received_text, &approved_text)?;
        Term::stderr().write_str(&rendered)?;
        Ok(())
    }
}

fn read_text(path: &Path) -> Result<String, ReporterError> {
    std::fs::read_to_string(path).map_err(|source| ReporterError::FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a line diff from the approved text to the received text
pub fn render_line_diff(received: &str, approved: &str) -> Result<String, ReporterError> {
    let mut output = String::new();
    writeln!(output, "{}", style("--- approved").red().bold())?;
    writeln!(output, "{}", style("+++ received").green().bold())?;

    let changeset = Changeset::new(approved, received, "\n");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(text) => {
                for line in text.lines() {
                    writeln!(output, " {}", style(line).dim())?;
                }
            }
            Difference::Rem(text) => {
                for line in text.lines() {
                    writeln!(output, "{}", style(format!("-{line}")).red())?;
                }
            }
            Difference::Add(text) => {
                for line in text.lines() {
                    writeln!(output, "{}", style(format!("+{line}")).green())?;
                }
            }
        }
    }

    Ok(output)
}
