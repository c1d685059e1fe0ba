//! # Approval Reporters - Choose How a Failed Approval Is Shown
//!
//! When an approval (golden file) test fails, something has to show the
//! developer what changed: a diff tool, a file viewer, an image comparison,
//! or nothing at all. This crate makes that choice.
//!
//! ## Main Components
//!
//! - **Resolver**: Picks exactly one reporter for a failure, from context
//!   overrides, the file-type table, or the quiet fallback
//! - **Context**: Thread-local override scopes the test layer pushes around
//!   a test, standing in for per-test reporter annotations
//! - **Registry**: The closed table of default reporters per file type
//! - **Reporters**: The reporter trait and the built-in diff, file-launcher,
//!   image, quiet and multi reporters
//!
//! ## Usage
//!
//! ### Resolving by file type
//!
//! ```
//! use approval_reporters::reporters::{QuietReporter, downcast_ref};
//!
//! # fn main() -> Result<(), approval_reporters::error::ReporterError> {
//! let reporter = approval_reporters::resolve("unknown-ext")?;
//! assert!(downcast_ref::<QuietReporter>(&*reporter).is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ### Overriding the reporter for one test
//!
//! ```
//! use approval_reporters::context::use_reporters;
//! use approval_reporters::core::{ContextOverride, ReporterDescriptor};
//! use approval_reporters::reporters::{MultiReporter, QuietReporter, downcast_ref};
//!
//! # fn main() -> Result<(), approval_reporters::error::ReporterError> {
//! let both = ContextOverride::new([
//!     ReporterDescriptor::of::<QuietReporter>("first"),
//!     ReporterDescriptor::of::<QuietReporter>("second"),
//! ])?;
//! let _guard = use_reporters(both);
//!
//! let reporter = approval_reporters::resolve("txt")?;
//! let multi = downcast_ref::<MultiReporter>(&*reporter).expect("two reporters were named");
//! assert_eq!(multi.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### A custom registry
//!
//! ```
//! use approval_reporters::common::ConfigBuilder;
//! use approval_reporters::config::ResolverConfig;
//! use approval_reporters::core::ReporterDescriptor;
//! use approval_reporters::registry::Registry;
//! use approval_reporters::reporters::{DiffReporter, QuietReporter};
//! use approval_reporters::resolver::Resolver;
//!
//! # fn main() -> Result<(), approval_reporters::error::ReporterError> {
//! let registry = Registry::builder()
//!     .with_entry("json", ReporterDescriptor::new("diff", || Ok(Box::new(DiffReporter::inline()))))
//!     .with_fallback(ReporterDescriptor::of::<QuietReporter>("quiet"))
//!     .build()?;
//!
//! let resolver = Resolver::new(&registry, ResolverConfig::default());
//! assert_eq!(resolver.select("json")?.reporter_names(), vec!["diff"]);
//! # Ok(())
//! # }
//! ```

// Private modules
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constants;
pub mod context;
pub mod core;
pub mod error;
pub mod executors;
pub mod registry;
pub mod reporters;
pub mod reports;
pub mod resolver;

pub use resolver::resolve;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    execute_command(cli.command)
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_env(constants::env::LOG)
        .unwrap_or_else(|_| match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
