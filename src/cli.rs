use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{FormatArgs, OverrideArgs, SettingsArgs};

#[derive(Parser)]
#[command(
    name = "approval-report",
    about = "Pick and run the reporter for a failed approval test",
    long_about = "approval-report decides how a failed approval test is presented: a diff tool, \
                  a file viewer, an image comparison, or nothing at all. The choice follows \
                  explicit reporter overrides first, then the default reporter for the file \
                  type, then a quiet fallback.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explain which reporter a file type resolves to
    ///
    /// Shows the reporter(s) that would present a failure, and whether they
    /// came from an override, the file-type table, or the fallback.
    Which {
        /// File-type identifier (txt, html, csv, file, png, ...)
        #[arg(value_name = "FILE_TYPE")]
        file_type: String,

        #[command(flatten)]
        overrides: OverrideArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Present a received/approved file pair with the resolved reporter
    #[command(
        long_about = "Resolve the reporter for the received file and invoke it with the received \
                      and approved paths. The file type defaults to the received file's \
                      extension. Use --use-reporter to override the choice."
    )]
    Report {
        /// File produced by the failing test
        #[arg(value_name = "RECEIVED")]
        received: PathBuf,

        /// Previously approved file
        #[arg(value_name = "APPROVED")]
        approved: PathBuf,

        /// File-type identifier (defaults to the received file's extension)
        #[arg(long, env = "APPROVAL_FILE_TYPE")]
        file_type: Option<String>,

        #[command(flatten)]
        overrides: OverrideArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show the default reporter for every file type
    List {
        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
