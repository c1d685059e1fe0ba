//! Configuration constants for approval-reporters
//!
//! This module contains the closed set of file-type keys, built-in reporter
//! names, environment variable names and the external tools probed on
//! `PATH`. Tool choices can be overridden through environment variables or a
//! TOML settings file.

/// File-type identifiers understood by the default registry
pub mod file_types {
    pub const TEXT: &str = "txt";
    pub const HTML: &str = "html";
    pub const EXCEL: &str = "csv";
    pub const FILE: &str = "file";
    pub const IMAGE: &str = "png";

    /// Reserved key holding the global fallback reporter
    pub const DEFAULT: &str = "default";
}

/// Stable names of the built-in reporters
pub mod reporters {
    pub const DIFF: &str = "diff";
    pub const FILE_LAUNCHER: &str = "file-launcher";
    pub const IMAGE: &str = "image";
    pub const QUIET: &str = "quiet";
    pub const MULTI: &str = "multi";

    /// Every name accepted by `--use-reporter`
    pub const BUILTIN: &[&str] = &[DIFF, FILE_LAUNCHER, IMAGE, QUIET];
}

/// Environment variables read by the settings layer
///
/// Tool variables are split on whitespace into a program and its arguments,
/// so a program path containing spaces needs the `{ program, args }` form in
/// the settings file instead.
pub mod env {
    pub const DIFF_TOOL: &str = "APPROVAL_DIFF_TOOL";
    pub const IMAGE_TOOL: &str = "APPROVAL_IMAGE_TOOL";
    pub const LAUNCHER: &str = "APPROVAL_LAUNCHER";
    pub const LOG: &str = "APPROVAL_REPORT_LOG";
}

/// External programs probed on `PATH` when nothing is configured
pub mod tools {
    /// Diff tools, in order of preference: (program, leading arguments)
    pub const DIFF_CANDIDATES: &[(&str, &[&str])] = &[
        ("meld", &[]),
        ("kdiff3", &[]),
        ("opendiff", &[]),
        ("code", &["--wait", "--diff"]),
    ];

    /// Tools able to compare two images side by side
    pub const IMAGE_CANDIDATES: &[(&str, &[&str])] =
        &[("p4merge", &[]), ("ksdiff", &[]), ("bcompare", &[])];

    #[cfg(target_os = "macos")]
    pub const PLATFORM_LAUNCHER: (&str, &[&str]) = ("open", &[]);

    #[cfg(windows)]
    pub const PLATFORM_LAUNCHER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

    #[cfg(not(any(target_os = "macos", windows)))]
    pub const PLATFORM_LAUNCHER: (&str, &[&str]) = ("xdg-open", &[]);
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
