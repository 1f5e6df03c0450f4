//! Core RDF term model.
//!
//! These types represent the subjects, predicates and objects emitted by the
//! CLSCor triple generators. All terms are owned values; IRIs declared as
//! namespace constants borrow their `'static` text and never allocate.
//!
//! `Display` renders every term in N-Triples syntax, so a [`Triple`] prints
//! as one complete N-Triples line.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::namespaces::{rdf, xsd};

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Cow<'static, str>);

impl Iri {
    /// Wraps a `'static` IRI without allocating. Usable in `const` items.
    #[must_use]
    pub const fn from_static(iri: &'static str) -> Self {
        Self(Cow::Borrowed(iri))
    }

    /// Creates an IRI from owned or borrowed text.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    /// Returns the IRI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part of the IRI following `namespace`, if the IRI starts with it.
    #[must_use]
    pub fn local_name(&self, namespace: &str) -> Option<&str> {
        self.0.strip_prefix(namespace)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self::new(iri)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

static NEXT_BLANK_NODE: AtomicU64 = AtomicU64::new(0);

/// A blank node.
///
/// Fresh blank nodes are labelled `b<n>` from a process-wide counter, so two
/// fragments expanded anywhere in the same process never share a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Allocates a blank node distinct from every other fresh blank node.
    #[must_use]
    pub fn fresh() -> Self {
        let n = NEXT_BLANK_NODE.fetch_add(1, Ordering::Relaxed);
        Self(Arc::from(format!("b{n}")))
    }

    /// Wraps an existing label, e.g. one read from a parsed document.
    ///
    /// Labelled nodes are not checked against fresh ones; keep parsed graphs
    /// apart from generated graphs.
    #[must_use]
    pub fn labelled(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the blank node label (without the `_:` prefix).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// The datatype of a [`Literal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Datatype {
    /// `xsd:string`.
    String,
    /// `xsd:integer`.
    Integer,
    /// `xsd:gYear`.
    GYear,
    /// `xsd:anyURI`.
    AnyUri,
    /// `rdf:langString` with the given language tag.
    LangString(String),
    /// Any other datatype IRI.
    Other(Iri),
}

impl Datatype {
    /// Returns the datatype IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        static STRING: Iri = xsd::STRING;
        static INTEGER: Iri = xsd::INTEGER;
        static G_YEAR: Iri = xsd::G_YEAR;
        static ANY_URI: Iri = xsd::ANY_URI;
        static LANG_STRING: Iri = rdf::LANG_STRING;
        match self {
            Datatype::String => STRING.as_str(),
            Datatype::Integer => INTEGER.as_str(),
            Datatype::GYear => G_YEAR.as_str(),
            Datatype::AnyUri => ANY_URI.as_str(),
            Datatype::LangString(_) => LANG_STRING.as_str(),
            Datatype::Other(iri) => iri.as_str(),
        }
    }

    /// Maps a datatype IRI onto the known variants.
    #[must_use]
    pub fn from_iri(iri: &str) -> Self {
        match iri {
            i if i == xsd::STRING.as_str() => Datatype::String,
            i if i == xsd::INTEGER.as_str() => Datatype::Integer,
            i if i == xsd::G_YEAR.as_str() => Datatype::GYear,
            i if i == xsd::ANY_URI.as_str() => Datatype::AnyUri,
            other => Datatype::Other(Iri::new(other)),
        }
    }
}

/// A typed literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: String,
    datatype: Datatype,
}

impl Literal {
    /// Creates a literal with an explicit datatype.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
        }
    }

    /// Creates an `xsd:string` literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, Datatype::String)
    }

    /// Creates an `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: impl Into<i128>) -> Self {
        Self::typed(value.into().to_string(), Datatype::Integer)
    }

    /// Creates an `xsd:gYear` literal. The year is not re-validated here.
    #[must_use]
    pub fn g_year(year: impl Into<String>) -> Self {
        Self::typed(year, Datatype::GYear)
    }

    /// Creates an `xsd:anyURI` literal.
    #[must_use]
    pub fn any_uri(uri: impl Into<String>) -> Self {
        Self::typed(uri, Datatype::AnyUri)
    }

    /// Returns the lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Returns the datatype.
    #[must_use]
    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escaped = escape_string(&self.lexical);
        match &self.datatype {
            Datatype::String => write!(f, "\"{escaped}\""),
            Datatype::LangString(tag) => write!(f, "\"{escaped}\"@{tag}"),
            other => write!(f, "\"{escaped}\"^^<{}>", other.iri()),
        }
    }
}

/// The subject position of a triple: an IRI or a blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    Blank(BlankNode),
}

impl Subject {
    /// Returns the IRI if this subject is named.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Subject::Iri(iri) => Some(iri),
            Subject::Blank(_) => None,
        }
    }

    /// Returns the blank node if this subject is anonymous.
    #[must_use]
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Subject::Blank(node) => Some(node),
            Subject::Iri(_) => None,
        }
    }
}

impl From<Iri> for Subject {
    fn from(iri: Iri) -> Self {
        Subject::Iri(iri)
    }
}

impl From<&Iri> for Subject {
    fn from(iri: &Iri) -> Self {
        Subject::Iri(iri.clone())
    }
}

impl From<BlankNode> for Subject {
    fn from(node: BlankNode) -> Self {
        Subject::Blank(node)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Iri(iri) => iri.fmt(f),
            Subject::Blank(node) => node.fmt(f),
        }
    }
}

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    Blank(BlankNode),
    /// A typed literal.
    Literal(Literal),
}

impl Term {
    /// Returns the IRI if this term is named.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the blank node if this term is anonymous.
    #[must_use]
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Term::Blank(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns the equivalent subject, or `None` for literals.
    #[must_use]
    pub fn to_subject(&self) -> Option<Subject> {
        match self {
            Term::Iri(iri) => Some(Subject::Iri(iri.clone())),
            Term::Blank(node) => Some(Subject::Blank(node.clone())),
            Term::Literal(_) => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<&Iri> for Term {
    fn from(iri: &Iri) -> Self {
        Term::Iri(iri.clone())
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Subject> for Term {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::Blank(node) => Term::Blank(node),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Blank(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

/// A subject–predicate–object statement. Never mutated once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Subject,
    /// Predicate IRI.
    pub predicate: Iri,
    /// Object (IRI, blank node or literal).
    pub object: Term,
}

impl Triple {
    /// Builds a triple from anything convertible into its positions.
    #[must_use]
    pub fn new(subject: impl Into<Subject>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Escapes a lexical form for use inside a double-quoted Turtle/N-Triples string.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
