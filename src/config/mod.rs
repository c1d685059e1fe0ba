//! # Configuration Module
//!
//! This module provides configuration structures for the resolver, the
//! external tools used by the built-in reporters, and each CLI command.
//!
//! ## Configurations
//!
//! - **ResolverConfig**: Options for the resolution algorithm itself
//! - **ToolSettings**: Diff, image and launcher programs, read from a TOML
//!   file and the environment
//! - **WhichConfig**: Configuration for the `which` command
//! - **ReportConfig**: Configuration for the `report` command
//! - **ListConfig**: Configuration for the `list` command
//!
//! ## Example
//!
//! ```
//! use approval_reporters::common::ConfigBuilder;
//! use approval_reporters::config::ResolverConfig;
//!
//! let config = ResolverConfig::builder()
//!     .with_strict_introspection(true)
//!     .build()
//!     .unwrap();
//! assert!(config.strict_introspection);
//! ```

pub mod list;
pub mod report;
pub mod resolver;
pub mod tools;
pub mod which;

pub use list::ListConfig;
pub use report::ReportConfig;
pub use resolver::ResolverConfig;
pub use tools::ToolSettings;
pub use which::WhichConfig;
