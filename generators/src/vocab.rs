//! Controlled vocabulary lookup.
//!
//! A vocabulary maps `rdfs:label` lexical forms to the IRI of the labelled
//! subject. Matching is exact and case-sensitive; language-tagged labels are
//! not terms. When one label appears on several subjects, the first subject in
//! document order wins.
//!
//! [`Vocabularies`] is built once at startup (built-ins, optionally overlaid
//! by a directory of `*.ttl` files) and passed to generators by reference.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use clscor_ontology::model::{Datatype, Iri};
use clscor_ontology::namespaces::rdfs;
use clscor_ontology::reader;
use clscor_ontology::Graph;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::VocabError;

/// Identifier types (`viaf`, `gnd`, ...).
pub const IDENTIFIER: &str = "identifier";
/// Document formats (`TEI`, ...).
pub const FORMAT: &str = "format";
/// Source types (`first edition`, ...).
pub const SOURCE_TYPE: &str = "source_type";
/// Appellation types (`artificial title`, ...).
pub const APPELLATION: &str = "appellation";
/// Corpus features (`token`, ...).
pub const FEATURE: &str = "feature";
/// Methods used by tools.
pub const METHOD: &str = "method";

const BUILTIN: &[(&str, &str)] = &[
    (IDENTIFIER, include_str!("../vocabs/identifier.ttl")),
    (FORMAT, include_str!("../vocabs/format.ttl")),
    (SOURCE_TYPE, include_str!("../vocabs/source_type.ttl")),
    (APPELLATION, include_str!("../vocabs/appellation.ttl")),
    (FEATURE, include_str!("../vocabs/feature.ttl")),
    (METHOD, include_str!("../vocabs/method.ttl")),
];

/// One named vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    name: String,
    terms: Vec<(String, Iri)>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collects the plain `rdfs:label`s of `graph`.
    pub fn from_graph(name: impl Into<String>, graph: &Graph) -> Self {
        let mut terms = Vec::new();
        let mut index = HashMap::new();
        for triple in graph.iter().filter(|t| t.predicate == rdfs::LABEL) {
            let (Some(subject), Some(label)) = (triple.subject.as_iri(), triple.object.as_literal())
            else {
                continue;
            };
            if *label.datatype() != Datatype::String || index.contains_key(label.lexical()) {
                continue;
            }
            index.insert(label.lexical().to_owned(), terms.len());
            terms.push((label.lexical().to_owned(), subject.clone()));
        }
        Self {
            name: name.into(),
            terms,
            index,
        }
    }

    /// Parses a Turtle document.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Parse`] when the document is not valid Turtle.
    pub fn from_turtle(name: impl Into<String>, source: &str) -> Result<Self, VocabError> {
        let name = name.into();
        match reader::read_turtle(source) {
            Ok(graph) => Ok(Self::from_graph(name, &graph)),
            Err(source) => Err(VocabError::Parse { name, source }),
        }
    }

    /// Reads a Turtle file; the vocabulary is named after the file stem.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Io`] or [`VocabError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, VocabError> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let source = fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_turtle(name, &source)
    }

    /// Vocabulary name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The IRI labelled `term`, if any.
    pub fn get(&self, term: &str) -> Option<&Iri> {
        self.index.get(term).map(|&i| &self.terms[i].1)
    }

    /// `true` when `term` is a label of this vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Labels in document order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(label, _)| label.as_str())
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` when the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// All loaded vocabularies, by name.
#[derive(Debug, Clone, Default)]
pub struct Vocabularies {
    vocabs: BTreeMap<String, Vocabulary>,
}

impl Vocabularies {
    /// No vocabularies at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The vocabularies compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Parse`] if a built-in file is malformed.
    pub fn builtin() -> Result<Self, VocabError> {
        let mut vocabs = Self::empty();
        for (name, source) in BUILTIN {
            vocabs.insert(Vocabulary::from_turtle(*name, source)?);
        }
        Ok(vocabs)
    }

    /// Adds or replaces a vocabulary.
    pub fn insert(&mut self, vocabulary: Vocabulary) {
        debug!(name = vocabulary.name(), terms = vocabulary.len(), "loaded vocabulary");
        self.vocabs.insert(vocabulary.name.clone(), vocabulary);
    }

    /// Loads every `*.ttl` file below `dir`, replacing same-named vocabularies.
    /// Returns the number of files loaded.
    ///
    /// # Errors
    ///
    /// Returns the first read or parse failure.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, VocabError> {
        let mut loaded = 0;
        let mut paths: Vec<_> = WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "ttl"))
            .collect();
        paths.sort();
        for path in paths {
            self.insert(Vocabulary::from_file(&path)?);
            loaded += 1;
        }
        Ok(loaded)
    }

    /// A vocabulary by name.
    pub fn get(&self, name: &str) -> Option<&Vocabulary> {
        self.vocabs.get(name)
    }

    /// Loaded vocabulary names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vocabs.keys().map(String::as_str)
    }

    /// Resolves `term` in vocabulary `name`.
    ///
    /// # Errors
    ///
    /// [`VocabError::NotFound`] when no label matches exactly;
    /// [`VocabError::UnknownVocabulary`] when `name` is not loaded.
    pub fn lookup(&self, name: &str, term: &str) -> Result<Iri, VocabError> {
        let vocabulary = self
            .get(name)
            .ok_or_else(|| VocabError::UnknownVocabulary(name.to_owned()))?;
        vocabulary
            .get(term)
            .cloned()
            .ok_or_else(|| VocabError::NotFound {
                vocabulary: name.to_owned(),
                term: term.to_owned(),
            })
    }

    /// Resolves an optional type annotation; misses are logged and yield `None`.
    pub fn lookup_optional(&self, name: &str, term: &str) -> Option<Iri> {
        match self.lookup(name, term) {
            Ok(iri) => Some(iri),
            Err(err) => {
                debug!(vocabulary = name, term, %err, "omitting optional type annotation");
                None
            }
        }
    }

    /// Term list of vocabulary `name`.
    ///
    /// # Errors
    ///
    /// [`VocabError::UnknownVocabulary`] when `name` is not loaded.
    pub fn terms(&self, name: &str) -> Result<Vec<&str>, VocabError> {
        self.get(name)
            .map(|v| v.terms().collect())
            .ok_or_else(|| VocabError::UnknownVocabulary(name.to_owned()))
    }

    /// The first term of vocabulary `name` that occurs as a substring of `value`.
    ///
    /// This is a containment heuristic (e.g. `gnd` in `https://d-nb.info/gnd/118540238`).
    /// Callers opt into it explicitly; it is never applied during lookup.
    pub fn infer_contained_term(&self, name: &str, value: &str) -> Option<&str> {
        self.get(name)?.terms().find(|term| value.contains(term))
    }
}
