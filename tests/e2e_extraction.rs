// LogSift - tests/e2e_extraction.rs
//
// End-to-end tests for the load -> extract -> catalog -> filter pipeline.
//
// These exercise a real fixture file on disk read through the platform
// layer, so line endings, blank lines, and pretty-printed JSON are handled
// exactly as a user's file would be.

use logsift::app::state::AppState;
use logsift::core::catalog::catalog;
use logsift::core::export::{export, ExportFormat};
use logsift::core::extractor::extract;
use logsift::core::filter::filter;
use logsift::core::level::resolve_level;
use logsift::core::model::{Record, SeverityHierarchy};
use logsift::platform::fs::read_file_lossy;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture() -> Vec<Record> {
    let content = read_file_lossy(&fixture("service_mixed.log")).expect("fixture readable");
    extract(&content).records
}

fn msgs(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.get("msg")
                .and_then(|m| m.as_str())
                .unwrap_or("<none>")
                .to_string()
        })
        .collect()
}

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn e2e_extracts_records_and_counts_ignored_lines() {
    let content = read_file_lossy(&fixture("service_mixed.log")).unwrap();
    let result = extract(&content);

    assert_eq!(result.records.len(), 8);
    assert_eq!(result.ignored_count, 9, "diagnostics: {:?}", result.diagnostics);
    assert_eq!(result.lines_processed, 18);
    assert_eq!(result.blank_lines(), 1);

    let non_blank = content.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(result.records.len() + result.ignored_count, non_blank);
}

#[test]
fn e2e_pretty_printed_json_is_not_reassembled() {
    let records = load_fixture();
    let all: Vec<&Record> = records.iter().collect();
    assert!(!msgs(&all).contains(&"pretty printed".to_string()));
}

#[test]
fn e2e_levels_resolve_across_field_names() {
    let records = load_fixture();
    let labels: Vec<String> = records.iter().map(resolve_level).collect();
    assert_eq!(
        labels,
        ["DEBUG", "INFO", "WARN", "ERROR", "FATAL", "SUCCESS", "UNKNOWN", "UNKNOWN"]
    );
}

// =============================================================================
// Catalog and filtering
// =============================================================================

#[test]
fn e2e_catalog_lists_observed_levels() {
    let records = load_fixture();
    assert_eq!(
        catalog(&records),
        ["ALL", "DEBUG", "ERROR", "FATAL", "INFO", "SUCCESS", "UNKNOWN", "WARN"]
    );
}

#[test]
fn e2e_severity_floor_and_exact_fallback() {
    let records = load_fixture();
    let h = SeverityHierarchy::default();

    assert_eq!(
        msgs(&filter(&records, "", "WARN", &h)),
        ["slow upstream", "charge failed", "worker crashed"]
    );
    assert_eq!(msgs(&filter(&records, "", "SUCCESS", &h)), ["migration applied"]);
    assert_eq!(msgs(&filter(&records, "", "UNKNOWN", &h)), ["heartbeat", "<none>"]);
}

#[test]
fn e2e_search_is_unscoped() {
    let records = load_fixture();
    let h = SeverityHierarchy::default();

    assert_eq!(msgs(&filter(&records, "card_declined", "ALL", &h)), ["charge failed"]);
    assert_eq!(msgs(&filter(&records, "8443", "ALL", &h)), ["listening"]);
    assert_eq!(msgs(&filter(&records, "\"retry\":false", "ERROR", &h)), ["charge failed"]);
    assert!(filter(&records, "card_declined", "FATAL", &h).is_empty());
}

// =============================================================================
// Full session
// =============================================================================

#[test]
fn e2e_session_refilters_from_full_set_and_exports() {
    let mut state = AppState::new(SeverityHierarchy::default());
    state.load_file(&fixture("service_mixed.log")).unwrap();

    state.set_selected_level("FATAL");
    assert_eq!(msgs(&state.visible_records()), ["worker crashed"]);

    state.set_selected_level("INFO");
    state.set_search_term("2024-03-02T09:14:0");
    assert_eq!(
        msgs(&state.visible_records()),
        ["listening", "slow upstream", "charge failed", "worker crashed"]
    );

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("matches.jsonl");
    let format = ExportFormat::from_path(&out_path).unwrap();
    let file = std::fs::File::create(&out_path).unwrap();
    let written = export(&state.visible_records(), file, format).unwrap();
    assert_eq!(written, 4);

    let reloaded = extract(&std::fs::read_to_string(&out_path).unwrap());
    assert_eq!(reloaded.records.len(), 4);
    assert_eq!(reloaded.ignored_count, 0);
}
