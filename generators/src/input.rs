//! Input readers.
//!
//! A file that cannot be read as a whole is an [`InputError`]; a single
//! record that does not deserialize becomes [`RecordError::Malformed`] in its
//! slot so the batch can report it and move on.

use std::fs::{self, File};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::corpora::Corpus;
use crate::error::{InputError, RecordError};

/// One input slot: deserialized fields or the reason they could not be.
pub type RawRecord<F> = Result<F, RecordError>;

/// Reads `path` as CSV when its extension is `csv`, as JSON otherwise.
///
/// # Errors
///
/// As [`read_json_records`] or [`read_csv_records`].
pub fn read_records<C: Corpus>(path: &Path) -> Result<Vec<RawRecord<C::Fields>>, InputError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_records::<C>(path)
    } else {
        read_json_records::<C>(path)
    }
}

/// Reads a JSON array of records, or a Gutendex page (`{"results": [...]}`).
///
/// # Errors
///
/// [`InputError::Io`] if the file cannot be read, [`InputError::Json`] if it
/// is not JSON or holds neither shape.
pub fn read_json_records<C: Corpus>(path: &Path) -> Result<Vec<RawRecord<C::Fields>>, InputError> {
    let source = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&source).map_err(|err| InputError::Json {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut page) => match page.remove("results") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(InputError::Json {
                    path: path.to_path_buf(),
                    reason: "object without a `results` array".into(),
                })
            }
        },
        other => {
            return Err(InputError::Json {
                path: path.to_path_buf(),
                reason: format!("expected an array, found {}", kind(&other)),
            })
        }
    };
    debug!(path = %path.display(), records = items.len(), "read JSON input");
    Ok(items.into_iter().map(parse_value::<C>).collect())
}

/// Deserializes one JSON value after the corpus' preprocessing.
pub fn parse_value<C: Corpus>(mut value: Value) -> RawRecord<C::Fields> {
    C::preprocess(&mut value);
    serde_json::from_value(value).map_err(|err| RecordError::Malformed(err.to_string()))
}

/// Reads a CSV file with a header row. Cells are trimmed; empty cells are
/// absent fields.
///
/// # Errors
///
/// [`InputError::Io`] if the file cannot be opened, [`InputError::Csv`] if
/// the header row cannot be read.
pub fn read_csv_records<C: Corpus>(path: &Path) -> Result<Vec<RawRecord<C::Fields>>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    reader.headers().map_err(|err| InputError::Csv {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let records: Vec<_> = reader
        .deserialize::<C::Fields>()
        .map(|row| row.map_err(|err| RecordError::Malformed(err.to_string())))
        .collect();
    debug!(path = %path.display(), records = records.len(), "read CSV input");
    Ok(records)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::corpora::{Gutenberg, Rem, ToolInventory};

    fn file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        File::create(&path).unwrap().write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn gutendex_page_is_unwrapped() {
        let (_dir, path) = file(
            "page.json",
            r#"{"count": 2, "next": null, "results": [
                {"id": 84, "title": "Frankenstein", "authors": [{"name": "Shelley, Mary", "birth_year": 1797}],
                 "languages": ["en"], "formats": {}},
                {"id": "eighty-five"}
            ]}"#,
        );
        let records = read_records::<Gutenberg>(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().id, Some(84));
        assert!(matches!(records[1], Err(RecordError::Malformed(_))));
    }

    #[test]
    fn rem_placeholders_are_cleared_before_deserialization() {
        let (_dir, path) = file(
            "rem.json",
            r#"[{"id": "M001", "title": "NA", "genre": "-", "token_count": "1234"}]"#,
        );
        let records = read_json_records::<Rem>(&path).unwrap();
        let fields = records[0].as_ref().unwrap();
        assert_eq!(fields.title, None);
        assert_eq!(fields.genre, None);
    }

    #[test]
    fn scalar_document_is_rejected() {
        let (_dir, path) = file("bad.json", "42");
        assert!(matches!(read_json_records::<Rem>(&path), Err(InputError::Json { .. })));
        let (_dir, path) = file("page.json", r#"{"count": 0}"#);
        assert!(matches!(read_json_records::<Rem>(&path), Err(InputError::Json { .. })));
    }

    #[test]
    fn csv_empty_cells_are_absent() {
        let (_dir, path) = file(
            "tools.csv",
            "name,url,description,license,deliverable,notes,developers,methods,formats\n\
             stylo , https://example.org/stylo,,GPL-3.0,,,Maciej Eder,stylometry,XML\n",
        );
        let records = read_records::<ToolInventory>(&path).unwrap();
        let tool = records[0].as_ref().unwrap();
        assert_eq!(tool.name.as_deref(), Some("stylo"));
        assert_eq!(tool.description, None);
        assert_eq!(tool.license.as_deref(), Some("GPL-3.0"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_records::<ToolInventory>(&dir.path().join("nope.csv")),
            Err(InputError::Io { .. })
        ));
    }
}
