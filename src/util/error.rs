// LogSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Per-line extraction problems are diagnostics (LineError), never
// propagated: extraction always returns a complete result.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for LogSift operations.
#[derive(Debug)]
pub enum LogSiftError {
    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LogSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LogSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Line diagnostics
// ---------------------------------------------------------------------------

/// Why a non-blank input line did not become a record.
#[derive(Debug)]
pub enum LineError {
    /// The trimmed line is not brace-delimited.
    NotJsonObject { line_number: u64 },

    /// The line is brace-delimited but is not valid JSON.
    MalformedJson {
        line_number: u64,
        source: serde_json::Error,
    },
}

impl LineError {
    /// 1-based line number of the offending line.
    pub fn line_number(&self) -> u64 {
        match self {
            Self::NotJsonObject { line_number } => *line_number,
            Self::MalformedJson { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotJsonObject { line_number } => {
                write!(f, "line {line_number}: not a JSON object line")
            }
            Self::MalformedJson {
                line_number,
                source,
            } => write!(f, "line {line_number}: malformed JSON: {source}"),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedJson { source, .. } => Some(source),
            Self::NotJsonObject { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Severity hierarchy errors
// ---------------------------------------------------------------------------

/// Errors building a custom severity hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// No labels were supplied.
    Empty,

    /// More labels than `MAX_HIERARCHY_LEN`.
    TooLong { len: usize, max: usize },

    /// A label was blank after trimming.
    BlankLabel { position: usize },

    /// The same label appears twice (compared after upper-casing).
    Duplicate { label: String },

    /// `ALL` and `UNKNOWN` are sentinels and cannot be ranked.
    Reserved { label: String },
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "severity hierarchy must contain at least one label"),
            Self::TooLong { len, max } => {
                write!(f, "severity hierarchy has {len} labels, maximum is {max}")
            }
            Self::BlankLabel { position } => {
                write!(f, "severity hierarchy label at position {position} is blank")
            }
            Self::Duplicate { label } => {
                write!(f, "severity hierarchy lists '{label}' more than once")
            }
            Self::Reserved { label } => {
                write!(f, "'{label}' is reserved and cannot appear in the hierarchy")
            }
        }
    }
}

impl std::error::Error for HierarchyError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// The output path's extension does not name a known format.
    UnsupportedFormat { path: PathBuf },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::UnsupportedFormat { path } => write!(
                f,
                "cannot infer export format from '{}'. \
                 Use a .csv, .json, .jsonl or .ndjson extension.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<ExportError> for LogSiftError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading configuration. Never fatal: each is
/// reported as a warning and the affected values fall back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config file exceeds `MAX_CONFIG_FILE_SIZE`.
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// A config value is not acceptable.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge { path, size, max } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max} bytes",
                path.display()
            ),
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is invalid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_line_error_reports_line_number() {
        let source = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let err = LineError::MalformedJson {
            line_number: 7,
            source,
        };
        assert_eq!(err.line_number(), 7);
        assert!(err.to_string().starts_with("line 7: malformed JSON"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_export_error_converts_and_chains() {
        let err: LogSiftError = ExportError::Io {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        }
        .into();
        assert!(err.to_string().contains("pipe closed"));
        assert!(err.source().is_some());
    }
}
