//! Error types for record validation, vocabulary lookup and generation.

use std::path::PathBuf;

use clscor_ontology::reader::ReadError;
use thiserror::Error;

/// A Binding Record failed validation.
///
/// `field` is a path into the input record, e.g. `work_ids[1].source_type`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("{field}: required field is missing or empty")]
    Missing {
        /// Offending field.
        field: String,
    },

    /// An enum-typed field holds a value outside its closed set.
    #[error("{field}: `{value}` is not one of the allowed values ({allowed})")]
    NotAllowed {
        /// Offending field.
        field: String,
        /// The rejected value.
        value: String,
        /// Comma-separated allowed values.
        allowed: String,
    },

    /// Any other constraint (format, cross-field consistency).
    #[error("{field}: {constraint}")]
    Constraint {
        /// Offending field.
        field: String,
        /// The violated constraint.
        constraint: String,
    },
}

impl ValidationError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub(crate) fn constraint(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::Constraint {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// The path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::NotAllowed { field, .. } | Self::Constraint { field, .. } => {
                field
            }
        }
    }
}

/// Vocabulary loading and lookup errors.
#[derive(Error, Debug)]
pub enum VocabError {
    /// No `rdfs:label` in the vocabulary matches the term.
    #[error("no term `{term}` in vocabulary `{vocabulary}`")]
    NotFound {
        /// Vocabulary name.
        vocabulary: String,
        /// Looked-up term.
        term: String,
    },

    /// No vocabulary of that name is loaded.
    #[error("unknown vocabulary `{0}`")]
    UnknownVocabulary(String),

    /// A vocabulary file could not be read.
    #[error("cannot read vocabulary file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A vocabulary file is not valid Turtle.
    #[error("cannot parse vocabulary `{name}`: {source}")]
    Parse {
        /// Vocabulary name.
        name: String,
        /// Underlying error.
        #[source]
        source: ReadError,
    },
}

impl VocabError {
    /// `true` for a plain "term not found" miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Triple generation failed for a validated record.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A vocabulary term the record's identity depends on did not resolve.
    #[error("mandatory vocabulary lookup failed: {0}")]
    MandatoryLookup(#[source] VocabError),
}

/// Why one record of a batch was not converted.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The raw record could not be deserialized.
    #[error("malformed record: {0}")]
    Malformed(String),

    /// The record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Triple generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Input files could not be read as a whole.
#[derive(Error, Debug)]
pub enum InputError {
    /// I/O failure.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array or Gutendex page.
    #[error("{path} is not a JSON array of records: {reason}")]
    Json {
        /// File path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The CSV header could not be read.
    #[error("{path} is not a readable CSV file: {reason}")]
    Csv {
        /// File path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Invalid converter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML is malformed.
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        let err = ValidationError::missing("work_title");
        assert_eq!(err.to_string(), "work_title: required field is missing or empty");
        assert_eq!(err.field(), "work_title");

        let err = ValidationError::NotAllowed {
            field: "work_ids[0].source_type".into(),
            value: "secondEdition".into(),
            allowed: "firstEdition, printSource".into(),
        };
        assert!(err.to_string().starts_with("work_ids[0].source_type: `secondEdition`"));
    }

    #[test]
    fn record_error_is_transparent_over_validation() {
        let err: RecordError = ValidationError::constraint("authors[0].full_name", "mismatch").into();
        assert_eq!(err.to_string(), "authors[0].full_name: mismatch");
    }

    #[test]
    fn not_found_is_distinguished() {
        let err = VocabError::NotFound {
            vocabulary: "identifier".into(),
            term: "nope".into(),
        };
        assert!(err.is_not_found());
        assert!(!VocabError::UnknownVocabulary("x".into()).is_not_found());
    }
}
