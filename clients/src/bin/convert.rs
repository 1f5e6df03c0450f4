//! `clscor-convert` — Converts one corpus' metadata records into a CLSCor graph.
//!
//! Records are read from a JSON array (ELTeC, DLK, ReM, Gutenberg), a
//! Gutendex page (`{"results": [...]}`) or a CSV file (tool inventory).
//! Records that fail validation are logged and skipped.
//!
//! **Usage:**
//! ```
//! clscor-convert <corpus> --input <file> [--out <file>] [--format turtle|ntriples]
//!     [--config <toml>] [--vocabs <dir>] [--entity-base <iri>] [--hash-length <n>]
//!     [--singletons per-run|per-record] [--infer-id-types] [--strict]
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `clscor_generators=info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use clscor_generators::{ConvertConfig, Context, CorpusKind, SingletonPolicy};
use clscor_ontology::{Graph, RdfFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Convert corpus metadata records into CLSCor RDF.
#[derive(Parser)]
#[command(name = "clscor-convert", version, about = "Convert corpus metadata records into CLSCor RDF")]
struct Args {
    /// Corpus of the input: eltec, dlk, gutenberg, rem or tool-inventory.
    corpus: CorpusKind,

    /// Input records (JSON, or CSV for the tool inventory).
    #[arg(long)]
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output serialization (default: from --out's extension, else the config).
    #[arg(long)]
    format: Option<RdfFormat>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of `*.ttl` vocabularies overlaid on the built-in ones.
    #[arg(long)]
    vocabs: Option<PathBuf>,

    /// Namespace entity URIs are minted under.
    #[arg(long)]
    entity_base: Option<String>,

    /// Characters of the label hash in deterministic URIs.
    #[arg(long)]
    hash_length: Option<usize>,

    /// When run-level singleton entities are emitted.
    #[arg(long)]
    singletons: Option<SingletonPolicy>,

    /// Fill untyped identifiers from the identifier vocabulary.
    #[arg(long)]
    infer_id_types: bool,

    /// Exit non-zero when any record failed.
    #[arg(long)]
    strict: bool,
}

impl Args {
    /// The configuration file (or defaults) with command-line overrides applied.
    fn config(&self) -> Result<ConvertConfig> {
        let mut config = match &self.config {
            Some(path) => ConvertConfig::load(path)?,
            None => ConvertConfig::default(),
        };
        if let Some(dir) = &self.vocabs {
            config.vocab_dir = Some(dir.clone());
        }
        if let Some(base) = &self.entity_base {
            config.entity_base = base.clone();
        }
        if let Some(length) = self.hash_length {
            config.hash_length = length;
        }
        if let Some(policy) = self.singletons {
            config.singletons = policy;
        }
        if let Some(format) = self.format.or_else(|| {
            self.out
                .as_ref()
                .and_then(|out| out.extension())
                .and_then(|ext| ext.to_str())
                .and_then(RdfFormat::from_extension)
        }) {
            config.format = format;
        }
        config.infer_id_types |= self.infer_id_types;
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("clscor_generators=info".parse()?))
        .init();

    let args = Args::parse();
    let config = args.config()?;
    let ctx = Context::from_config(&config).context("Failed to load vocabularies")?;

    let mut graph = Graph::new();
    let report = args
        .corpus
        .convert_file(&args.input, &ctx, &mut graph)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let output = config.format.serialize(&graph);
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
            }
            fs::write(path, &output).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %config.format, triples = graph.len(), "written");
        }
        None => io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?,
    }

    for failure in &report.failures {
        eprintln!("skipped {failure}");
    }
    if args.strict && !report.is_clean() {
        bail!("{} of {} record(s) failed", report.failures.len(), report.total());
    }
    Ok(())
}
