//! Binding Records: validated, immutable per-source-unit metadata.
//!
//! Each corpus has a raw `*Fields` type (deserialized from JSON or CSV, every
//! field optional so that missing data surfaces as a [`ValidationError`]
//! naming the field) and a `*Record` type that can only be obtained through
//! the corpus' `validate` function.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::vocab::{self, Vocabularies};

pub mod dlk;
pub mod eltec;
pub mod gutenberg;
pub mod rem;
pub mod tool_inventory;

/// A required string: present and not blank.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::missing(field)),
    }
}

/// An optional string; blank counts as absent.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A year in `xsd:gYear` lexical shape: optional minus sign, at least four digits.
pub(crate) fn g_year(field: &str, value: String) -> Result<String, ValidationError> {
    let digits = value.strip_prefix('-').unwrap_or(&value);
    if digits.len() >= 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(ValidationError::constraint(
            field,
            format!("`{value}` is not a year (expected at least four digits)"),
        ))
    }
}

/// An optional year.
pub(crate) fn optional_g_year(
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    optional(value).map(|v| g_year(field, v)).transpose()
}

/// Characters an IRI reference may not contain, besides whitespace and controls.
const IRI_EXCLUDED: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// An absolute `http`/`https` URL that can be written as an IRI.
pub(crate) fn http_url(field: &str, value: String) -> Result<String, ValidationError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let writable = !value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || IRI_EXCLUDED.contains(&c));
    match rest {
        Some(rest) if !rest.is_empty() && writable => Ok(value),
        _ => Err(ValidationError::constraint(
            field,
            format!("`{value}` is not an absolute http(s) URL"),
        )),
    }
}

/// A term that must be a label of vocabulary `name`.
pub(crate) fn vocab_term(
    field: &str,
    value: String,
    name: &str,
    vocabs: &Vocabularies,
) -> Result<String, ValidationError> {
    let terms = vocabs.terms(name).map_err(|err| ValidationError::constraint(field, err.to_string()))?;
    if terms.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ValidationError::NotAllowed {
            field: field.to_owned(),
            value,
            allowed: terms.join(", "),
        })
    }
}

/// Where an identified edition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// `firstEdition`
    FirstEdition,
    /// `printSource`
    PrintSource,
    /// `digitalSource`
    DigitalSource,
    /// `unspecified`
    Unspecified,
}

impl SourceType {
    /// All accepted spellings, in declaration order.
    pub const ALLOWED: [&'static str; 4] = ["firstEdition", "printSource", "digitalSource", "unspecified"];

    /// The input spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::FirstEdition => "firstEdition",
            SourceType::PrintSource => "printSource",
            SourceType::DigitalSource => "digitalSource",
            SourceType::Unspecified => "unspecified",
        }
    }

    /// The `source_type` vocabulary label: the camel-case words, lower-cased
    /// and space-separated (`firstEdition` → `first edition`).
    pub fn vocab_label(self) -> String {
        let mut label = String::new();
        for c in self.as_str().chars() {
            if c.is_ascii_uppercase() {
                label.push(' ');
                label.push(c.to_ascii_lowercase());
            } else {
                label.push(c);
            }
        }
        label
    }

    pub(crate) fn parse(field: &str, value: Option<String>) -> Result<Self, ValidationError> {
        let value = required(field, value)?;
        value.parse().map_err(|()| ValidationError::NotAllowed {
            field: field.to_owned(),
            value,
            allowed: Self::ALLOWED.join(", "),
        })
    }
}

impl FromStr for SourceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "firstEdition" => Ok(SourceType::FirstEdition),
            "printSource" => Ok(SourceType::PrintSource),
            "digitalSource" => Ok(SourceType::DigitalSource),
            "unspecified" => Ok(SourceType::Unspecified),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw `{id_value, id_type}` pair.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IdFields {
    /// Identifier value.
    pub id_value: Option<String>,
    /// Identifier type, a term of the `identifier` vocabulary.
    pub id_type: Option<String>,
}

/// A validated external identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    value: String,
    id_type: Option<String>,
}

impl Identifier {
    pub(crate) fn validate(
        field: &str,
        fields: IdFields,
        vocabs: &Vocabularies,
    ) -> Result<Self, ValidationError> {
        let value = required(&format!("{field}.id_value"), fields.id_value)?;
        let id_type = optional(fields.id_type)
            .map(|t| vocab_term(&format!("{field}.id_type"), t, vocab::IDENTIFIER, vocabs))
            .transpose()?;
        Ok(Self { value, id_type })
    }

    /// Identifier value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Identifier type, if known.
    pub fn id_type(&self) -> Option<&str> {
        self.id_type.as_deref()
    }
}

/// Fills a null `id_type` with the first identifier term contained in the value.
pub(crate) fn infer_id_type(fields: &mut IdFields, vocabs: &Vocabularies) {
    if optional(fields.id_type.clone()).is_some() {
        return;
    }
    if let Some(value) = fields.id_value.as_deref() {
        fields.id_type = vocabs
            .infer_contained_term(vocab::IDENTIFIER, value)
            .map(str::to_owned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(required("x", Some("  ".into())).is_err());
        assert!(required("x", None).is_err());
        assert_eq!(required("x", Some("a".into())).unwrap(), "a");
    }

    #[test]
    fn g_year_shape() {
        assert!(g_year("d", "1848".into()).is_ok());
        assert!(g_year("d", "-0450".into()).is_ok());
        assert!(g_year("d", "12345".into()).is_ok());
        assert!(g_year("d", "184".into()).is_err());
        assert!(g_year("d", "1848-05".into()).is_err());
        assert_eq!(optional_g_year("d", Some(String::new())).unwrap(), None);
    }

    #[test]
    fn http_url_must_be_writable_as_iri() {
        assert!(http_url("u", "https://www.gutenberg.org/ebooks/84.rdf".into()).is_ok());
        assert!(http_url("u", "http://example.org/a?b=c#d".into()).is_ok());
        assert!(http_url("u", "ftp://example.org/a".into()).is_err());
        assert!(http_url("u", "https://".into()).is_err());
        for bad in ["84 copy.rdf", "84>.rdf", "84\".rdf", "84{1}.rdf", "84\t.rdf"] {
            let url = format!("https://www.gutenberg.org/ebooks/{bad}");
            assert!(http_url("u", url.clone()).is_err(), "{url}");
        }
    }

    #[test]
    fn source_type_labels() {
        assert_eq!(SourceType::FirstEdition.vocab_label(), "first edition");
        assert_eq!(SourceType::DigitalSource.vocab_label(), "digital source");
        assert_eq!(SourceType::Unspecified.vocab_label(), "unspecified");
    }

    #[test]
    fn source_type_closed_set() {
        let err = SourceType::parse("work_ids[0].source_type", Some("secondEdition".into())).unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
        assert_eq!(err.field(), "work_ids[0].source_type");
    }

    #[test]
    fn identifier_type_must_be_vocabulary_term() {
        let vocabs = Vocabularies::builtin().unwrap();
        let ok = Identifier::validate(
            "author_ids[0]",
            IdFields { id_value: Some("27068555".into()), id_type: Some("viaf".into()) },
            &vocabs,
        )
        .unwrap();
        assert_eq!(ok.id_type(), Some("viaf"));

        let err = Identifier::validate(
            "author_ids[0]",
            IdFields { id_value: Some("1".into()), id_type: Some("VIAF!".into()) },
            &vocabs,
        )
        .unwrap_err();
        assert_eq!(err.field(), "author_ids[0].id_type");
    }

    #[test]
    fn inference_only_fills_null_types() {
        let vocabs = Vocabularies::builtin().unwrap();
        let mut fields = IdFields { id_value: Some("https://d-nb.info/gnd/118540238".into()), id_type: None };
        infer_id_type(&mut fields, &vocabs);
        assert_eq!(fields.id_type.as_deref(), Some("gnd"));

        let mut typed = IdFields { id_value: Some("https://viaf.org/x".into()), id_type: Some("gnd".into()) };
        infer_id_type(&mut typed, &vocabs);
        assert_eq!(typed.id_type.as_deref(), Some("gnd"));
    }
}
