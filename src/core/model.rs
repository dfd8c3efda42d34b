// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies. These types are the shared vocabulary across
// all layers.

use crate::util::constants::{
    ALL_LEVELS, DEFAULT_HIERARCHY, MAX_HIERARCHY_LEN, UNKNOWN_LEVEL,
};
use crate::util::error::{HierarchyError, LineError};

// =============================================================================
// Record
// =============================================================================

/// One extracted log record: an open-ended mapping from field name to JSON
/// value. No schema is imposed; fields are looked up opportunistically.
///
/// Key order follows the source line (serde_json `preserve_order`), so the
/// serialised form used by text search matches what the line contained.
pub type Record = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Extraction result
// =============================================================================

/// Output of extracting one file's content.
///
/// Replaced wholesale on every load; never merged with a prior result.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// Parsed records in line order. A record's identity is its index here.
    pub records: Vec<Record>,

    /// Non-blank lines that did not yield a record.
    pub ignored_count: usize,

    /// Physical lines seen, blank lines included.
    pub lines_processed: u64,

    /// Why individual lines were ignored (capped at `MAX_LINE_DIAGNOSTICS`;
    /// `ignored_count` is not capped).
    pub diagnostics: Vec<LineError>,
}

impl ExtractionResult {
    /// Blank lines are everything not accounted for by records or ignores.
    pub fn blank_lines(&self) -> u64 {
        self.lines_processed
            .saturating_sub((self.records.len() + self.ignored_count) as u64)
    }
}

// =============================================================================
// Severity hierarchy
// =============================================================================

/// Ordered severity labels, least to most severe.
///
/// Immutable after construction. Owned by the caller and passed into the
/// filter engine so tests (and config) can substitute their own ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityHierarchy {
    labels: Vec<String>,
}

impl SeverityHierarchy {
    /// Build a hierarchy from labels ordered least to most severe.
    ///
    /// Labels are trimmed and upper-cased so they compare equal to resolved
    /// record labels.
    pub fn new<I, S>(labels: I) -> Result<Self, HierarchyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised: Vec<String> = Vec::new();
        for (position, raw) in labels.into_iter().enumerate() {
            let label = raw.as_ref().trim().to_uppercase();
            if label.is_empty() {
                return Err(HierarchyError::BlankLabel { position });
            }
            if label == ALL_LEVELS || label == UNKNOWN_LEVEL {
                return Err(HierarchyError::Reserved { label });
            }
            if normalised.contains(&label) {
                return Err(HierarchyError::Duplicate { label });
            }
            normalised.push(label);
        }

        if normalised.is_empty() {
            return Err(HierarchyError::Empty);
        }
        if normalised.len() > MAX_HIERARCHY_LEN {
            return Err(HierarchyError::TooLong {
                len: normalised.len(),
                max: MAX_HIERARCHY_LEN,
            });
        }

        Ok(Self { labels: normalised })
    }

    /// Position of `label` in the hierarchy (0 = least severe).
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Labels, least severe first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for SeverityHierarchy {
    fn default() -> Self {
        Self {
            labels: DEFAULT_HIERARCHY.iter().map(|l| l.to_string()).collect(),
        }
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// User-driven filter inputs. Reset to defaults on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring searched in the serialised record.
    /// Empty = no text filter.
    pub search_term: String,

    /// `"ALL"` or a severity label acting as the minimum severity.
    pub selected_level: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_level: ALL_LEVELS.to_string(),
        }
    }
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_level == ALL_LEVELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hierarchy_order() {
        let h = SeverityHierarchy::default();
        assert_eq!(h.position("DEBUG"), Some(0));
        assert_eq!(h.position("FATAL"), Some(4));
        assert_eq!(h.position("SUCCESS"), None);
    }

    #[test]
    fn test_custom_hierarchy_is_normalised() {
        let h = SeverityHierarchy::new(["trace", " Notice ", "CRIT"]).unwrap();
        assert_eq!(h.labels(), ["TRACE", "NOTICE", "CRIT"]);
    }

    #[test]
    fn test_custom_hierarchy_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert_eq!(SeverityHierarchy::new(empty), Err(HierarchyError::Empty));
        assert_eq!(
            SeverityHierarchy::new(["info", "INFO"]),
            Err(HierarchyError::Duplicate {
                label: "INFO".to_string()
            })
        );
        assert_eq!(
            SeverityHierarchy::new(["all"]),
            Err(HierarchyError::Reserved {
                label: "ALL".to_string()
            })
        );
        assert_eq!(
            SeverityHierarchy::new(["info", "  "]),
            Err(HierarchyError::BlankLabel { position: 1 })
        );
    }

    #[test]
    fn test_filter_state_defaults() {
        let state = FilterState::default();
        assert!(state.is_empty());
        assert_eq!(state.selected_level, "ALL");
        assert!(state.search_term.is_empty());
    }
}
