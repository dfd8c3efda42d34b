// LogSift - core/filter.rs
//
// Filter engine for extracted records. The level and search predicates are
// AND-combined. Always evaluated against the complete record set; there is
// no incremental narrowing of a previous result.
// Core layer: pure logic, no I/O.

use crate::core::level::resolve_level;
use crate::core::model::{FilterState, Record, SeverityHierarchy};
use crate::util::constants::ALL_LEVELS;

/// Matching records, in original order.
pub fn filter<'a>(
    records: &'a [Record],
    search_term: &str,
    selected_level: &str,
    hierarchy: &SeverityHierarchy,
) -> Vec<&'a Record> {
    let state = FilterState {
        search_term: search_term.to_string(),
        selected_level: selected_level.to_string(),
    };
    filter_indices(records, &state, hierarchy)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Indices into `records` of every entry matching `state`.
///
/// Returning indices avoids cloning records and lets a view address the
/// full set directly.
pub fn filter_indices(
    records: &[Record],
    state: &FilterState,
    hierarchy: &SeverityHierarchy,
) -> Vec<usize> {
    if state.is_empty() {
        return (0..records.len()).collect();
    }

    let level = LevelPredicate::new(&state.selected_level, hierarchy);
    let term_lower = state.search_term.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| level.matches(record) && matches_search(record, &term_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Severity predicate, resolved once per filter call.
enum LevelPredicate<'a> {
    /// `"ALL"`: every record passes.
    Any,

    /// Selected label is ranked: it acts as a minimum severity.
    Floor {
        hierarchy: &'a SeverityHierarchy,
        floor: usize,
    },

    /// Selected label is not ranked: exact label match only.
    Exact(&'a str),
}

impl<'a> LevelPredicate<'a> {
    fn new(selected: &'a str, hierarchy: &'a SeverityHierarchy) -> Self {
        if selected == ALL_LEVELS {
            return Self::Any;
        }
        match hierarchy.position(selected) {
            Some(floor) => Self::Floor { hierarchy, floor },
            None => Self::Exact(selected),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Any => true,
            Self::Floor { hierarchy, floor } => hierarchy
                .position(&resolve_level(record))
                .is_some_and(|pos| pos >= *floor),
            Self::Exact(label) => resolve_level(record) == *label,
        }
    }
}

/// Case-insensitive substring match against the record's compact JSON text,
/// so field names, nested values and number/boolean literals all match.
fn matches_search(record: &Record, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    match serde_json::to_string(record) {
        Ok(text) => text.to_lowercase().contains(term_lower),
        Err(e) => {
            // A Map<String, Value> always serialises; treat failure as no match.
            tracing::warn!(error = %e, "Record could not be serialised for search");
            false
        }
    }
}
