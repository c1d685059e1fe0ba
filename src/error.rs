use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(approval_reporters::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum ReporterError {
    #[error("Failed to construct reporter '{reporter}'")]
    #[diagnostic(
        code(approval_reporters::construction_failure),
        help("The reporter chosen for this failure could not be built; check its tool settings")
    )]
    ConstructionFailure {
        reporter: String,
        #[source]
        source: Box<ReporterError>,
    },

    #[error("Could not inspect call frame '{frame}': {reason}")]
    #[diagnostic(
        code(approval_reporters::introspection_miss),
        help("Disable strict introspection to skip unreadable frames")
    )]
    IntrospectionMiss { frame: String, reason: String },

    #[error("Tool '{tool}' was not found")]
    #[diagnostic(
        code(approval_reporters::tool_not_found),
        help("Install the tool or point the APPROVAL_* variable at a program on PATH")
    )]
    ToolNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to launch '{program}'")]
    #[diagnostic(
        code(approval_reporters::launch_failed),
        help("Check that the program is executable")
    )]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(approval_reporters::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(approval_reporters::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(approval_reporters::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(approval_reporters::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(approval_reporters::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "approvals.toml".to_string(),
            source_code: NamedSource::new("approvals.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'approvals.toml'");
    }

    #[test]
    fn test_construction_failure_keeps_cause() {
        let error = ReporterError::ConstructionFailure {
            reporter: "diff".to_string(),
            source: Box::new(ReporterError::ConfigurationError {
                message: "no tool".to_string(),
            }),
        };

        assert_eq!(error.to_string(), "Failed to construct reporter 'diff'");
        let cause = std::error::Error::source(&error).expect("cause should be attached");
        assert_eq!(cause.to_string(), "Configuration error: no tool");
    }

    #[test]
    fn test_introspection_miss_display() {
        let error = ReporterError::IntrospectionMiss {
            frame: "OrderTests::renders".to_string(),
            reason: "type not loadable".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Could not inspect call frame 'OrderTests::renders': type not loadable"
        );
    }

    #[test]
    fn test_file_read_error() {
        let error = ReporterError::FileReadError {
            path: PathBuf::from("/tmp/missing.received.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };

        assert_eq!(
            error.to_string(),
            "Failed to read file '/tmp/missing.received.txt'"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = ReporterError::LaunchFailed {
            program: "meld".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };

        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let error: ReporterError = io::Error::other("some io error").into();

        match error {
            ReporterError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
