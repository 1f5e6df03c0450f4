//! `clscor-conformance` — Shape-checks generated CLSCor artifacts.
//!
//! Runs the conformance validators over one Turtle or N-Triples file, or
//! every such file below a directory:
//! - syntax (the artifact parses)
//! - literals (non-empty, valid lexical forms for typed literals)
//! - structure (blank-node closure, typed and labelled entities)
//! - namespaces (predicates and classes from the model's namespaces)
//!
//! **Usage:**
//! ```
//! clscor-conformance --artifact <path> [--quiet]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use clscor_conformance::{run_all, Severity};
use tracing_subscriber::EnvFilter;

/// Check generated CLSCor artifacts.
#[derive(Parser)]
#[command(
    name = "clscor-conformance",
    version,
    about = "Shape-check generated CLSCor Turtle and N-Triples artifacts"
)]
struct Args {
    /// Artifact file, or a directory searched for `.ttl` and `.nt` files.
    #[arg(long)]
    artifact: PathBuf,

    /// Print failures and warnings only.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("clscor_conformance=info".parse()?))
        .init();

    let args = Args::parse();
    let report = run_all(&args.artifact)?;

    println!("CLSCor Conformance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        if args.quiet && result.severity == Severity::Pass {
            continue;
        }
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.pass_count(),
        report.warning_count(),
        report.failure_count()
    );

    if !report.all_passed() {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", report.failure_count());
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
