//! Syntax validator.
//!
//! An artifact conforms when:
//! - its extension names a known serialization (`.ttl`, `.nt`)
//! - it is non-empty
//! - it parses as that serialization

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clscor_ontology::{reader, Graph, RdfFormat};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "syntax";

/// A parsed artifact.
#[derive(Debug)]
pub struct Artifact {
    /// Where it was read from.
    pub path: PathBuf,
    /// Serialization it was parsed as.
    pub format: RdfFormat,
    /// Its triples.
    pub graph: Graph,
}

impl Artifact {
    /// File name for messages.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Reads and parses `path`, recording the outcome in `report`.
///
/// Returns `None` when the artifact could not be parsed; the reason is a
/// failure in `report`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load(path: &Path, report: &mut ConformanceReport) -> Result<Option<Artifact>> {
    let name = display_name(path);
    let Some(format) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(RdfFormat::from_extension)
    else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}: unrecognised extension (expected .ttl or .nt)"),
        ));
        return Ok(None);
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        report.push(TestResult::fail(VALIDATOR, format!("{name}: file is empty")));
        return Ok(None);
    }

    match reader::read(format, &content) {
        Ok(graph) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name}: parses as {format:?} ({} triples)", graph.len()),
            ));
            Ok(Some(Artifact {
                path: path.to_path_buf(),
                format,
                graph,
            }))
        }
        Err(err) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{name}: does not parse as {format:?}"),
                vec![err.to_string()],
            ));
            Ok(None)
        }
    }
}
