// LogSift - core/catalog.rs
//
// Distinct severity labels observed in a record set, for populating a
// level selector.

use crate::core::level::resolve_level;
use crate::core::model::Record;
use crate::util::constants::ALL_LEVELS;
use std::collections::BTreeSet;

/// `"ALL"` followed by every distinct resolved label, sorted as plain strings.
///
/// Driven purely by the data: labels outside the severity hierarchy are
/// listed verbatim, hierarchy labels that never occur are not.
pub fn catalog(records: &[Record]) -> Vec<String> {
    let observed: BTreeSet<String> = records
        .iter()
        .map(resolve_level)
        // A record literally labelled "all" would duplicate the sentinel.
        .filter(|label| label != ALL_LEVELS)
        .collect();

    std::iter::once(ALL_LEVELS.to_string())
        .chain(observed)
        .collect()
}
