// LogSift - app/state.rs
//
// Application state management. Holds the current extraction result, the
// level catalog, the filter state and the visible indices. This is the
// single owner of session state; the core functions it calls hold none.

use crate::core::catalog::catalog;
use crate::core::extractor::extract;
use crate::core::filter::filter_indices;
use crate::core::model::{ExtractionResult, FilterState, Record, SeverityHierarchy};
use crate::core::summary::{summarise, ExtractionSummary};
use crate::platform::fs::read_file_lossy;
use crate::util::error::LogSiftError;
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Severity ordering used for level filtering. Fixed for the session.
    pub hierarchy: SeverityHierarchy,

    /// File the current records came from (None for in-memory content).
    pub source: Option<PathBuf>,

    /// Result of the most recent load.
    pub extraction: ExtractionResult,

    /// Level selector contents for the current records, starting with "ALL".
    pub levels: Vec<String>,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Indices of records matching the current filter (into `extraction.records`).
    pub filtered_indices: Vec<usize>,
}

impl AppState {
    /// Create empty state using the given severity ordering.
    pub fn new(hierarchy: SeverityHierarchy) -> Self {
        Self {
            hierarchy,
            source: None,
            extraction: ExtractionResult::default(),
            levels: catalog(&[]),
            filter_state: FilterState::default(),
            filtered_indices: Vec::new(),
        }
    }

    /// Read `path` and load its content, replacing all prior state.
    ///
    /// On failure the previous state is left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<(), LogSiftError> {
        let content = read_file_lossy(path).map_err(|e| LogSiftError::Io {
            path: path.to_path_buf(),
            operation: "read",
            source: e,
        })?;
        self.load_content(Some(path.to_path_buf()), &content);
        Ok(())
    }

    /// Extract `content` and make it the current record set.
    ///
    /// Nothing from the previous load survives: records, catalog and the
    /// filter state are all replaced.
    pub fn load_content(&mut self, source: Option<PathBuf>, content: &str) {
        self.extraction = extract(content);
        self.levels = catalog(&self.extraction.records);
        self.source = source;
        self.filter_state = FilterState::default();
        self.apply_filters();

        tracing::info!(
            source = ?self.source,
            records = self.extraction.records.len(),
            ignored = self.extraction.ignored_count,
            levels = self.levels.len() - 1,
            "Content loaded"
        );
    }

    /// Update the search term and re-filter.
    pub fn set_search_term(&mut self, term: &str) {
        self.filter_state.search_term = term.to_string();
        self.apply_filters();
    }

    /// Update the selected level ("ALL" or a label) and re-filter.
    pub fn set_selected_level(&mut self, level: &str) {
        self.filter_state.selected_level = level.to_string();
        self.apply_filters();
    }

    /// Recompute filtered indices from the full record set.
    pub fn apply_filters(&mut self) {
        self.filtered_indices =
            filter_indices(&self.extraction.records, &self.filter_state, &self.hierarchy);
        tracing::debug!(
            search = %self.filter_state.search_term,
            level = %self.filter_state.selected_level,
            visible = self.filtered_indices.len(),
            total = self.extraction.records.len(),
            "Filters applied"
        );
    }

    /// Records matching the current filter, in original order.
    pub fn visible_records(&self) -> Vec<&Record> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.extraction.records.get(idx))
            .collect()
    }

    /// Statistics for the current load.
    pub fn summary(&self) -> ExtractionSummary {
        summarise(&self.extraction, &self.hierarchy)
    }

    /// Drop all loaded records and reset to initial state.
    pub fn clear(&mut self) {
        let hierarchy = std::mem::take(&mut self.hierarchy);
        *self = Self::new(hierarchy);
    }
}
