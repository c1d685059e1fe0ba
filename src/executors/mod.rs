//! Command executors that handle the actual logic for each command

pub mod list;
pub mod report;
pub mod which;

use miette::{Result, WrapErr};

use crate::config::ToolSettings;
use crate::context::OverrideGuard;
use crate::core::{CallFrame, ContextOverride};
use crate::reporters::builtin_descriptors;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Push the `--use-reporter` names as a method override for this command
fn enter_overrides(
    command: &str,
    reporters: &[String],
    settings: &ToolSettings,
) -> Result<Option<OverrideGuard>> {
    if reporters.is_empty() {
        return Ok(None);
    }

    let descriptors =
        builtin_descriptors(reporters, settings).wrap_err("Invalid --use-reporter value")?;
    let marker = ContextOverride::new(descriptors).wrap_err("Invalid --use-reporter value")?;
    let frame = CallFrame::new("approval-report", command).with_method_override(marker);
    Ok(Some(OverrideGuard::enter(frame)))
}
