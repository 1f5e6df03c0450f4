//! Serializers for accumulated graphs.
//!
//! Two formats are supported:
//! - **Turtle** ([`turtle`]): prefixed names for the known namespaces, one
//!   block per subject
//! - **N-Triples** ([`ntriples`]): one triple per line, absolute IRIs

use std::fmt;
use std::str::FromStr;

use crate::graph::Graph;
use crate::namespaces;

pub mod ntriples;
pub mod turtle;

/// Output syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RdfFormat {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl RdfFormat {
    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
        }
    }

    /// Guesses the format from a file extension.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ttl" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            _ => None,
        }
    }

    /// Serializes `graph` in this format.
    #[must_use]
    pub fn serialize(self, graph: &Graph) -> String {
        match self {
            RdfFormat::Turtle => turtle::to_turtle(graph, namespaces::all()),
            RdfFormat::NTriples => ntriples::to_ntriples(graph),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
        })
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown RDF format `{0}` (expected `turtle` or `ntriples`)")]
pub struct UnknownFormat(pub String);

impl FromStr for RdfFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}
