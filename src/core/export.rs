// LogSift - core/export.rs
//
// CSV and JSON-lines export of filtered records.
// Core layer: writes to any Write trait object.

use crate::core::level::resolve_level;
use crate::core::model::Record;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format for exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One compact JSON object per line.
    JsonLines,

    /// Two columns: resolved level, compact record JSON.
    Csv,
}

impl ExportFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json" | "jsonl" | "ndjson") => Ok(Self::JsonLines),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Export records in the given format. Returns the number written.
pub fn export<W: Write>(
    records: &[&Record],
    writer: W,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::JsonLines => export_jsonl(records, writer),
        ExportFormat::Csv => export_csv(records, writer),
    }
}

/// Export records as JSON lines, in the same text form search matches on.
pub fn export_jsonl<W: Write>(records: &[&Record], mut writer: W) -> Result<usize, ExportError> {
    let mut count = 0;
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|e| ExportError::Json { source: e })?;
        writer
            .write_all(b"\n")
            .map_err(|e| ExportError::Io { source: e })?;
        count += 1;
    }
    writer.flush().map_err(|e| ExportError::Io { source: e })?;
    Ok(count)
}

/// Export records as CSV with columns `level,record`.
pub fn export_csv<W: Write>(records: &[&Record], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["level", "record"])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        let json = serde_json::to_string(record).map_err(|e| ExportError::Json { source: e })?;
        csv_writer
            .write_record([resolve_level(record).as_str(), json.as_str()])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::extract;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.CSV")).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.ndjson")).unwrap(),
            ExportFormat::JsonLines
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("out.txt")),
            Err(ExportError::UnsupportedFormat { .. })
        ));
        assert!(ExportFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_jsonl_export_keeps_source_text() {
        let result = extract("{\"level\":\"info\",\"msg\":\"a\"}\nnoise\n{\"z\":1,\"a\":2}");
        let refs: Vec<&Record> = result.records.iter().collect();
        let mut out = Vec::new();
        let count = export_jsonl(&refs, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"level\":\"info\",\"msg\":\"a\"}\n{\"z\":1,\"a\":2}\n"
        );
    }

    #[test]
    fn test_csv_export_has_level_column() {
        let result = extract("{\"severity\":\"warn\",\"msg\":\"disk, almost full\"}");
        let refs: Vec<&Record> = result.records.iter().collect();
        let mut out = Vec::new();
        let count = export(&refs, &mut out, ExportFormat::Csv).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("level,record"));
        assert_eq!(
            lines.next(),
            Some("WARN,\"{\"\"severity\"\":\"\"warn\"\",\"\"msg\"\":\"\"disk, almost full\"\"}\"")
        );
    }
}
