// LogSift - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation. Invalid values never abort startup: each one is
// reported and replaced by its default.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::SeverityHierarchy;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resolved platform paths for LogSift configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Full path of config.toml (e.g. ~/.config/logsift/config.toml or
    /// %APPDATA%\LogSift\config\config.toml).
    pub config_file: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        let config_dir = match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
            None => {
                tracing::warn!("Could not determine platform directories, using current directory");
                PathBuf::from(".")
            }
        };
        let config_file = config_dir.join(constants::CONFIG_FILE_NAME);

        tracing::debug!(config = %config_file.display(), "Platform paths resolved");

        Self { config_file }
    }
}

// =============================================================================
// Output format
// =============================================================================

/// How matching records are printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `LEVEL  {json}` per record.
    #[default]
    Text,

    /// Compact JSON per record, nothing else.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[severity]` section.
    pub severity: SeveritySection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[severity]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SeveritySection {
    /// Labels ordered least to most severe.
    pub hierarchy: Option<Vec<String>>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// "text" or "json".
    pub format: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Severity ordering used by the level filter.
    pub hierarchy: SeverityHierarchy,

    /// Default stdout format.
    pub output_format: OutputFormat,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate the config file at `config_path`.
///
/// Returns the validated config and every problem found. A missing file
/// is not a problem (first run); an unreadable or unparseable one yields
/// defaults plus one error.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match read_config_text(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(e);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_config_text(path: &Path) -> Result<String, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max: constants::MAX_CONFIG_FILE_SIZE,
        });
    }
    std::fs::read_to_string(path).map_err(io_err)
}

/// Validate each field, accumulating every problem.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Severity: hierarchy --
    if let Some(labels) = raw.severity.hierarchy {
        match SeverityHierarchy::new(&labels) {
            Ok(hierarchy) => config.hierarchy = hierarchy,
            Err(e) => warnings.push(ConfigError::InvalidValue {
                field: "severity.hierarchy".to_string(),
                value: format!("{labels:?}"),
                expected: format!("{e}; using default {:?}", constants::DEFAULT_HIERARCHY),
            }),
        }
    }

    // -- Output: format --
    if let Some(ref format) = raw.output.format {
        match format.parse::<OutputFormat>() {
            Ok(f) => config.output_format = f,
            Err(_) => warnings.push(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                value: format.clone(),
                expected: "\"text\" or \"json\"".to_string(),
            }),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    config
}
