//! ACDH ISO 639-1 language vocabulary.

use crate::model::Iri;

terms! {
    "https://vocabs.acdh.oeaw.ac.at/iso6391/";
    DE = "de",
}

/// Returns the vocabulary IRI of a lower-case ISO 639-1 code.
#[must_use]
pub fn language(code: &str) -> Iri {
    Iri::new(format!("{NS}{code}"))
}
