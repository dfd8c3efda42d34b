// LogSift - core/summary.rs
//
// Extraction statistics for status displays.

use crate::core::level::resolve_level;
use crate::core::model::{ExtractionResult, SeverityHierarchy};
use std::collections::BTreeMap;
use std::fmt;

/// Counts describing one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Physical lines seen.
    pub lines_processed: u64,

    /// Lines that were empty after trimming.
    pub blank_lines: u64,

    /// Records extracted.
    pub records: usize,

    /// Non-blank lines that did not yield a record.
    pub ignored: usize,

    /// Records per resolved label.
    pub by_level: BTreeMap<String, usize>,

    /// Records whose label is not in the severity hierarchy
    /// (including `UNKNOWN`).
    pub unranked: usize,
}

/// Summarise an extraction result.
pub fn summarise(result: &ExtractionResult, hierarchy: &SeverityHierarchy) -> ExtractionSummary {
    let mut by_level: BTreeMap<String, usize> = BTreeMap::new();
    for record in &result.records {
        *by_level.entry(resolve_level(record)).or_insert(0) += 1;
    }

    let unranked = by_level
        .iter()
        .filter(|(label, _)| hierarchy.position(label).is_none())
        .map(|(_, count)| count)
        .sum();

    ExtractionSummary {
        lines_processed: result.lines_processed,
        blank_lines: result.blank_lines(),
        records: result.records.len(),
        ignored: result.ignored_count,
        by_level,
        unranked,
    }
}

impl fmt::Display for ExtractionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} lines: {} records, {} ignored, {} blank",
            self.lines_processed, self.records, self.ignored, self.blank_lines
        )?;
        if self.unranked > 0 {
            writeln!(f, "  {} records outside the severity hierarchy", self.unranked)?;
        }
        for (label, count) in &self.by_level {
            writeln!(f, "  {label:<10} {count}")?;
        }
        Ok(())
    }
}
