// LogSift - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogSift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Severity
// =============================================================================

/// Record fields consulted for the severity label, in priority order.
pub const LEVEL_FIELDS: [&str; 4] = ["level", "severity", "log_level", "logLevel"];

/// Label returned when a record carries none of the `LEVEL_FIELDS`.
pub const UNKNOWN_LEVEL: &str = "UNKNOWN";

/// Selector value meaning "no severity filter".
pub const ALL_LEVELS: &str = "ALL";

/// Default severity hierarchy, least to most severe.
pub const DEFAULT_HIERARCHY: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Upper bound on the number of labels a configured hierarchy may hold.
pub const MAX_HIERARCHY_LEN: usize = 32;

// =============================================================================
// Extraction limits
// =============================================================================

/// Maximum number of per-line diagnostics kept in an extraction result.
/// `ignored_count` keeps counting past this limit.
pub const MAX_LINE_DIAGNOSTICS: usize = 1_000;

/// Maximum number of characters of an ignored line echoed into debug logs.
pub const LOG_LINE_PREVIEW_CHARS: usize = 120;

// =============================================================================
// Configuration
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Config files larger than this are rejected without parsing.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
/// Kept quiet so stderr does not interleave with record output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
