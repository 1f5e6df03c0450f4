//! Entity URI allocation.
//!
//! Two policies:
//!
//! - **random**: namespace + a UUID v4 (122 random bits). Used for per-record
//!   entities that only need to be consistent within one record.
//! - **deterministic**: namespace + the first `hash_length` characters of the
//!   URL-safe base64 (unpadded) SHA-256 digest of a label. Used for shared
//!   entities (corpora, types, actors) so repeated runs converge on one URI.
//!
//! Each base64 character carries 6 bits, so the default length of 10 keeps 60
//! bits of the digest. For 10⁵ distinct labels the birthday bound puts the
//! collision probability near 4·10⁻⁹. Collisions are not checked at runtime.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::model::Iri;
use crate::namespaces::clscor;

/// Default number of hash characters in deterministic URIs.
pub const DEFAULT_HASH_LENGTH: usize = 10;

/// Smallest hash length accepted from configuration.
pub const MIN_HASH_LENGTH: usize = 8;

/// Length of an unpadded base64 SHA-256 digest; longer requests are clamped.
pub const MAX_HASH_LENGTH: usize = 43;

/// Returns `namespace` followed by a fresh UUID v4.
#[must_use]
pub fn allocate_random(namespace: &str) -> Iri {
    Iri::new(format!("{namespace}{}", Uuid::new_v4()))
}

/// Returns `namespace` followed by the truncated hash of `label`.
#[must_use]
pub fn allocate_deterministic(namespace: &str, label: &str, hash_length: usize) -> Iri {
    Iri::new(format!("{namespace}{}", truncated_hash(label, hash_length)))
}

/// URL-safe base64 of `SHA-256(label)`, truncated to `length` characters.
#[must_use]
pub fn truncated_hash(label: &str, length: usize) -> String {
    let mut encoded = URL_SAFE_NO_PAD.encode(Sha256::digest(label.as_bytes()));
    encoded.truncate(length.min(MAX_HASH_LENGTH));
    encoded
}

/// Allocates entity URIs under one namespace with one hash length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minter {
    namespace: String,
    hash_length: usize,
}

impl Default for Minter {
    fn default() -> Self {
        Self::new(clscor::NS)
    }
}

impl Minter {
    /// Creates a minter for `namespace` with [`DEFAULT_HASH_LENGTH`].
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            hash_length: DEFAULT_HASH_LENGTH,
        }
    }

    /// Sets the hash length of deterministic URIs.
    #[must_use]
    pub fn with_hash_length(mut self, hash_length: usize) -> Self {
        self.hash_length = hash_length;
        self
    }

    /// The namespace URIs are allocated under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The configured hash length.
    #[must_use]
    pub fn hash_length(&self) -> usize {
        self.hash_length
    }

    /// A fresh random URI.
    #[must_use]
    pub fn random(&self) -> Iri {
        allocate_random(&self.namespace)
    }

    /// The deterministic URI of `label`.
    #[must_use]
    pub fn hashed(&self, label: &str) -> Iri {
        allocate_deterministic(&self.namespace, label, self.hash_length)
    }
}
