// LogSift - core/extractor.rs
//
// Line-oriented extraction of JSON-object records from free-form text.
// Core layer: accepts already-decoded text, never touches the filesystem.

use crate::core::model::{ExtractionResult, Record};
use crate::util::constants::{LOG_LINE_PREVIEW_CHARS, MAX_LINE_DIAGNOSTICS};
use crate::util::error::LineError;

/// Extract every single-line JSON object from `content`.
///
/// Each physical line is judged on its own after trimming:
/// - blank: skipped, counted nowhere;
/// - `{...}` that parses: appended to `records`;
/// - anything else: counted in `ignored_count`.
///
/// Never fails. Multi-line JSON is not reassembled, so each of its lines is
/// ignored individually. Objects nested deeper than serde_json's recursion
/// limit (128) are reported as malformed rather than risking the stack.
pub fn extract(content: &str) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    for (line_idx, line) in content.lines().enumerate() {
        result.lines_processed += 1;
        let line_number = (line_idx as u64) + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !is_candidate(trimmed) {
            ignore(&mut result, LineError::NotJsonObject { line_number }, trimmed);
            continue;
        }

        match serde_json::from_str::<Record>(trimmed) {
            Ok(record) => result.records.push(record),
            Err(source) => ignore(
                &mut result,
                LineError::MalformedJson {
                    line_number,
                    source,
                },
                trimmed,
            ),
        }
    }

    tracing::debug!(
        lines = result.lines_processed,
        records = result.records.len(),
        ignored = result.ignored_count,
        "Extraction complete"
    );

    result
}

/// A trimmed line is a candidate when it is brace-delimited.
fn is_candidate(trimmed: &str) -> bool {
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

fn ignore(result: &mut ExtractionResult, error: LineError, line: &str) {
    result.ignored_count += 1;
    if result.diagnostics.len() < MAX_LINE_DIAGNOSTICS {
        tracing::trace!(
            line = %preview(line),
            reason = %error,
            "Ignored line"
        );
        result.diagnostics.push(error);
    }
}

fn preview(line: &str) -> String {
    line.chars().take(LOG_LINE_PREVIEW_CHARS).collect()
}
