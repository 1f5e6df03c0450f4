//! Converter configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clscor_ontology::mint::{Minter, DEFAULT_HASH_LENGTH, MAX_HASH_LENGTH, MIN_HASH_LENGTH};
use clscor_ontology::namespaces::clscor;
use clscor_ontology::RdfFormat;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pipeline::SingletonPolicy;

/// Settings of one conversion run, usually read from a TOML file and then
/// overridden from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Namespace all entity URIs are minted under
    #[serde(default = "default_entity_base")]
    pub entity_base: String,

    /// Characters of the label hash in deterministic URIs
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,

    /// Directory of `*.ttl` vocabularies overlaid on the built-in ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab_dir: Option<PathBuf>,

    /// When run-level singletons are emitted
    #[serde(default)]
    pub singletons: SingletonPolicy,

    /// Output serialization
    #[serde(default)]
    pub format: RdfFormat,

    /// Fill untyped identifiers from the identifier vocabulary
    #[serde(default)]
    pub infer_id_types: bool,
}

fn default_entity_base() -> String {
    clscor::NS.to_owned()
}

fn default_hash_length() -> usize {
    DEFAULT_HASH_LENGTH
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            entity_base: default_entity_base(),
            hash_length: default_hash_length(),
            vocab_dir: None,
            singletons: SingletonPolicy::default(),
            format: RdfFormat::default(),
            infer_id_types: false,
        }
    }
}

impl ConvertConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] for malformed TOML, [`ConfigError::Invalid`] for
    /// out-of-range values.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`ConvertConfig::from_toml`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.entity_base.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "entity_base `{base}` must be an http(s) IRI"
            )));
        }
        if !(base.ends_with('/') || base.ends_with('#')) {
            return Err(ConfigError::Invalid(format!(
                "entity_base `{base}` must end with `/` or `#`"
            )));
        }
        if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&self.hash_length) {
            return Err(ConfigError::Invalid(format!(
                "hash_length {} is outside {MIN_HASH_LENGTH}..={MAX_HASH_LENGTH}",
                self.hash_length
            )));
        }
        Ok(())
    }

    /// The minter for this configuration.
    pub fn minter(&self) -> Minter {
        Minter::new(self.entity_base.clone()).with_hash_length(self.hash_length)
    }
}
