// LogSift - platform/fs.rs
//
// File reading for the app layer. The core only ever sees decoded text.

use std::io;
use std::path::Path;

const UTF8_BOM: char = '\u{FEFF}';

/// Read the full content of a file as a string.
///
/// Invalid UTF-8 is replaced rather than rejected so one bad byte does not
/// hide every record in the file. A leading byte-order mark is dropped;
/// otherwise the first line could never start with `{`.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "File is not valid UTF-8; decoding lossily"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => {
            tracing::debug!(path = %path.display(), "Stripped UTF-8 byte-order mark");
            Ok(rest.to_string())
        }
        None => Ok(text),
    }
}
