//! Command implementations for the approval-report CLI
//!
//! This module contains the implementations for each CLI command:
//! - which: Explain which reporter a file type resolves to
//! - report: Present a received/approved pair with the resolved reporter
//! - list: Show the default reporter for every file type

pub mod list;
pub mod report;
pub mod which;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Which { .. } => which::execute_which_command(command),
        Commands::Report { .. } => report::execute_report_command(command),
        Commands::List { .. } => list::execute_list_command(command),
    }
}
