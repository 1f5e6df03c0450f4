//! CLSCor artifact conformance checks.
//!
//! Generated Turtle and N-Triples files are parsed back and shape-checked.
//! This is not schema validation: the checks catch generator defects (empty
//! or ill-typed literals, unclosed blank nodes, misspelt terms), nothing more.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `syntax` | known extension, non-empty, parses (sophia) |
//! | `literals` | no empty literals, `xsd:gYear`/`xsd:integer`/`xsd:anyURI` lexical forms |
//! | `structure` | blank-node closure, typed and labelled named subjects |
//! | `namespaces` | predicates and classes from the model's namespaces |
//!
//! # Entry Point
//!
//! ```no_run
//! use clscor_conformance::run_all;
//! use std::path::Path;
//!
//! let report = run_all(Path::new("out/eltec.ttl"))?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clscor_ontology::RdfFormat;
use tracing::debug;
use walkdir::WalkDir;

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::syntax::Artifact;

/// Checks one artifact, or every `.ttl`/`.nt` file below a directory.
///
/// Validators run in this order per artifact:
/// 1. syntax (the rest is skipped when the artifact does not parse)
/// 2. literals
/// 3. structure
/// 4. namespaces
///
/// # Errors
///
/// Returns an error if `target` does not exist or a file cannot be read.
pub fn run_all(target: &Path) -> Result<ConformanceReport> {
    let artifacts = discover(target)?;
    let mut report = ConformanceReport::new();
    if artifacts.is_empty() {
        report.push(TestResult::fail(
            "syntax",
            format!("no .ttl or .nt artifacts under {}", target.display()),
        ));
    }
    for path in &artifacts {
        report.extend(check_artifact(path)?);
    }
    Ok(report)
}

/// Runs every validator over one artifact file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn check_artifact(path: &Path) -> Result<ConformanceReport> {
    debug!(path = %path.display(), "checking artifact");
    let mut report = ConformanceReport::new();
    let Some(artifact) = validators::syntax::load(path, &mut report)? else {
        return Ok(report);
    };
    report.extend(validators::literals::validate(&artifact)?);
    report.extend(validators::structure::validate(&artifact));
    report.extend(validators::namespaces::validate(&artifact));
    Ok(report)
}

fn discover(target: &Path) -> Result<Vec<PathBuf>> {
    if !target.exists() {
        bail!("{} does not exist", target.display());
    }
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }
    let mut paths: Vec<_> = WalkDir::new(target)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(RdfFormat::from_extension)
                .is_some()
        })
        .collect();
    paths.sort();
    Ok(paths)
}
