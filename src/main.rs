// LogSift - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Loading the log file into AppState
// 4. Printing the level catalog, statistics, and matching records

use clap::Parser;
use logsift::app::state::AppState;
use logsift::core::export::{export, ExportFormat};
use logsift::core::level::resolve_level;
use logsift::core::model::Record;
use logsift::platform::config::{self, OutputFormat, PlatformPaths};
use logsift::util::constants::{self, ALL_LEVELS};
use logsift::util::error::LogSiftError;
use logsift::util::logging;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// LogSift - pull JSON log records out of mixed log files.
///
/// Every line that is a complete JSON object becomes a record; everything
/// else is counted and skipped. Records can be narrowed by a minimum
/// severity and a case-insensitive text search.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    /// Log file to read.
    path: PathBuf,

    /// Case-insensitive text to look for anywhere in a record.
    #[arg(short = 's', long = "search", default_value = "")]
    search: String,

    /// Minimum severity (e.g. WARN), a custom label for exact match, or ALL.
    #[arg(short = 'l', long = "level", default_value = ALL_LEVELS)]
    level: String,

    /// Print the levels present in the file and exit.
    #[arg(long = "levels")]
    list_levels: bool,

    /// Print extraction statistics to stderr.
    #[arg(long = "stats")]
    stats: bool,

    /// Output format for matching records: text or json.
    #[arg(long = "format")]
    format: Option<OutputFormat>,

    /// Also write matching records to this file (.csv, .json, .jsonl, .ndjson).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file);
    let (app_config, config_warnings) = config::load_config(&config_path);

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "LogSift starting"
    );

    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning");
        eprintln!("Warning: {warning}");
    }

    let output_format = cli.format.unwrap_or(app_config.output_format);
    let mut state = AppState::new(app_config.hierarchy);

    if let Err(e) = run(&cli, &mut state, output_format) {
        tracing::error!(error = %e, "LogSift failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, state: &mut AppState, output_format: OutputFormat) -> Result<(), LogSiftError> {
    state.load_file(&cli.path)?;

    if cli.stats {
        eprint!("{}", state.summary());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.list_levels {
        for label in &state.levels {
            if let Err(e) = writeln!(out, "{label}") {
                return ignore_broken_pipe(e, &cli.path);
            }
        }
        return flush(out, &cli.path);
    }

    // Catalog labels are upper-case; accept "warn" for "WARN".
    state.set_selected_level(&cli.level.to_uppercase());
    state.set_search_term(&cli.search);

    let visible = state.visible_records();
    tracing::debug!(
        visible = visible.len(),
        total = state.extraction.records.len(),
        "Printing matching records"
    );

    if let Some(ref output) = cli.output {
        export_to_file(&visible, output)?;
    }

    for record in &visible {
        if let Err(e) = print_record(&mut out, record, output_format) {
            return ignore_broken_pipe(e, &cli.path);
        }
    }

    flush(out, &cli.path)
}

fn print_record<W: Write>(out: &mut W, record: &Record, format: OutputFormat) -> io::Result<()> {
    let json = serde_json::to_string(record).map_err(io::Error::other)?;
    match format {
        OutputFormat::Text => writeln!(out, "{:<7} {json}", resolve_level(record)),
        OutputFormat::Json => writeln!(out, "{json}"),
    }
}

fn export_to_file(records: &[&Record], path: &Path) -> Result<(), LogSiftError> {
    let format = ExportFormat::from_path(path)?;
    let file = std::fs::File::create(path).map_err(|e| LogSiftError::Io {
        path: path.to_path_buf(),
        operation: "create export file",
        source: e,
    })?;
    let count = export(records, BufWriter::new(file), format)?;
    tracing::info!(path = %path.display(), count, ?format, "Export complete");
    Ok(())
}

fn flush<W: Write>(mut out: W, path: &Path) -> Result<(), LogSiftError> {
    match out.flush() {
        Ok(()) => Ok(()),
        Err(e) => ignore_broken_pipe(e, path),
    }
}

/// A closed pipe (e.g. `| head`) ends output normally.
fn ignore_broken_pipe(e: io::Error, path: &Path) -> Result<(), LogSiftError> {
    if e.kind() == io::ErrorKind::BrokenPipe {
        tracing::debug!("stdout closed early");
        Ok(())
    } else {
        Err(stdout_error(path, e))
    }
}

fn stdout_error(path: &Path, e: io::Error) -> LogSiftError {
    LogSiftError::Io {
        path: path.to_path_buf(),
        operation: "write records from",
        source: e,
    }
}
