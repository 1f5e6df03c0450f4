//! Per-corpus CLSCor triple generators.
//!
//! A conversion runs in four steps:
//!
//! 1. raw records are read from JSON or CSV ([`input`]);
//! 2. each is validated into an immutable Binding Record ([`bindings`]);
//! 3. the corpus generator allocates its entity URIs and describes the record
//!    as graph fragments ([`corpora`]), resolving controlled terms through
//!    [`vocab::Vocabularies`];
//! 4. the record's triples are merged into one graph ([`pipeline`]).
//!
//! # Example
//!
//! ```
//! use clscor_generators::bindings::dlk::DlkFields;
//! use clscor_generators::corpora::Dlk;
//! use clscor_generators::pipeline::{convert_record, Context};
//! use clscor_generators::vocab::Vocabularies;
//! use clscor_ontology::Minter;
//!
//! let ctx = Context::new(Vocabularies::builtin()?, Minter::default());
//! let fields = DlkFields {
//!     resource_uri: Some("https://dlk.example.org/dlk-0001".into()),
//!     dlk_id: Some("dlk-0001".into()),
//!     title: Some("Mondnacht".into()),
//!     ..DlkFields::default()
//! };
//! let graph = convert_record::<Dlk>(fields, &ctx)?;
//! assert!(!graph.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod bindings;
pub mod config;
pub mod corpora;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod vocab;

pub use config::ConvertConfig;
pub use corpora::Corpus;
pub use error::{ConfigError, GenerateError, InputError, RecordError, ValidationError, VocabError};
pub use pipeline::{convert_batch, convert_record, BatchReport, Context, CorpusKind, SingletonPolicy};
pub use vocab::Vocabularies;
