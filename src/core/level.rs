// LogSift - core/level.rs
//
// Severity label resolution. The one place that knows which record fields
// carry the level; filtering, cataloguing, summaries and display all go
// through `resolve_level`.

use crate::core::model::Record;
use crate::util::constants::{LEVEL_FIELDS, UNKNOWN_LEVEL};
use serde_json::Value;

/// Normalised (upper-cased) severity label for a record.
///
/// Consults `level`, `severity`, `log_level`, `logLevel` in that order and
/// takes the first with a non-empty value. Strings contribute their text,
/// other JSON values their JSON rendering. Returns `"UNKNOWN"` when no field
/// qualifies.
pub fn resolve_level(record: &Record) -> String {
    LEVEL_FIELDS
        .iter()
        .filter_map(|field| record.get(*field))
        .find_map(level_text)
        .map(|raw| raw.to_uppercase())
        .unwrap_or_else(|| UNKNOWN_LEVEL.to_string())
}

/// Text form of a level value; `None` for null and empty strings.
fn level_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_severity_field_is_upper_cased() {
        assert_eq!(resolve_level(&record(json!({"severity": "warn"}))), "WARN");
    }

    #[test]
    fn test_missing_fields_yield_unknown() {
        assert_eq!(resolve_level(&record(json!({}))), "UNKNOWN");
        assert_eq!(resolve_level(&record(json!({"msg": "hi"}))), "UNKNOWN");
    }

    #[test]
    fn test_field_priority() {
        let r = record(json!({"level": "INFO", "severity": "ERROR"}));
        assert_eq!(resolve_level(&r), "INFO");

        let r = record(json!({"logLevel": "debug", "log_level": "error"}));
        assert_eq!(resolve_level(&r), "ERROR");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let r = record(json!({"level": "", "severity": null, "log_level": "Fatal"}));
        assert_eq!(resolve_level(&r), "FATAL");

        let r = record(json!({"level": null}));
        assert_eq!(resolve_level(&r), "UNKNOWN");
    }

    #[test]
    fn test_non_string_values_are_rendered() {
        assert_eq!(resolve_level(&record(json!({"level": 30}))), "30");
        assert_eq!(resolve_level(&record(json!({"level": true}))), "TRUE");
    }

    #[test]
    fn test_zero_and_false_are_values_not_gaps() {
        let r = record(json!({"level": 0, "severity": "warn"}));
        assert_eq!(resolve_level(&r), "0");
        let r = record(json!({"level": false, "severity": "warn"}));
        assert_eq!(resolve_level(&r), "FALSE");
    }

    #[test]
    fn test_custom_labels_pass_through() {
        assert_eq!(resolve_level(&record(json!({"level": "success"}))), "SUCCESS");
    }
}
