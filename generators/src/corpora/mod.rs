//! Per-corpus triple generators.
//!
//! Every corpus implements [`Corpus`]: it names its raw input type, validates
//! it into a Binding Record, allocates the record's entity URIs up front and
//! describes the record as a list of [`Fragment`]s. Generation is a pure
//! function of record, URIs and vocabularies.

use clscor_ontology::fragment::{expand_all, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Triple};
use serde::de::DeserializeOwned;

use crate::error::{GenerateError, ValidationError};
use crate::vocab::Vocabularies;

pub mod dlk;
pub mod eltec;
pub mod gutenberg;
pub mod rem;
pub mod tool_inventory;

pub use dlk::Dlk;
pub use eltec::Eltec;
pub use gutenberg::Gutenberg;
pub use rem::Rem;
pub use tool_inventory::ToolInventory;

/// One source corpus.
pub trait Corpus {
    /// Corpus name as used on the command line.
    const NAME: &'static str;

    /// Raw, deserializable record.
    type Fields: DeserializeOwned;
    /// Validated Binding Record.
    type Record;
    /// The record's Entity URI Namespace.
    type Uris;

    /// Validates raw fields into a record.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    fn validate(fields: Self::Fields, vocabs: &Vocabularies) -> Result<Self::Record, ValidationError>;

    /// A human-readable identifier of a raw record for failure reports.
    fn label(fields: &Self::Fields) -> Option<String>;

    /// Rewrites raw JSON before deserialization. No-op by default.
    fn preprocess(_value: &mut serde_json::Value) {}

    /// Fills untyped identifiers from the containment heuristic. No-op by default.
    fn infer_id_types(_fields: &mut Self::Fields, _vocabs: &Vocabularies) {}

    /// Allocates every entity URI the record's fragments use.
    fn allocate(record: &Self::Record, minter: &Minter) -> Self::Uris;

    /// Describes one record.
    ///
    /// # Errors
    ///
    /// [`GenerateError::MandatoryLookup`] when a vocabulary term the record
    /// cannot do without is unknown.
    fn fragments(
        record: &Self::Record,
        uris: &Self::Uris,
        vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError>;

    /// Run-level entities shared by all records.
    fn singletons(minter: &Minter) -> Vec<Fragment>;
}

/// Allocates URIs for `record` and returns its triples.
///
/// # Errors
///
/// See [`Corpus::fragments`].
pub fn generate<C: Corpus>(
    record: &C::Record,
    minter: &Minter,
    vocabs: &Vocabularies,
) -> Result<impl Iterator<Item = Triple>, GenerateError> {
    let uris = C::allocate(record, minter);
    Ok(expand_all(C::fragments(record, &uris, vocabs)?))
}

/// A lookup whose failure fails the record.
pub(crate) fn mandatory(vocabs: &Vocabularies, vocabulary: &str, term: &str) -> Result<Iri, GenerateError> {
    vocabs.lookup(vocabulary, term).map_err(GenerateError::MandatoryLookup)
}

/// `"{text} [{role}]"`, the label shape used for every minted entity.
pub(crate) fn tagged(text: &str, role: &str) -> String {
    format!("{text} [{role}]")
}
