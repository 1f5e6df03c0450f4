//! Graph accumulator.
//!
//! [`Graph`] is a set of triples that remembers insertion order, so serialized
//! output follows generation order. Adding a triple that is already present
//! is a no-op, which is what collapses run-level singletons emitted by
//! several records into one description.

use std::collections::HashSet;

use crate::model::{Iri, Subject, Term, Triple};

/// An insertion-ordered set of triples.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    index: HashSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.index.contains(&triple) {
            return false;
        }
        self.index.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Moves every triple of `other` into `self`, keeping `other`'s order.
    pub fn merge(&mut self, other: Graph) {
        self.extend(other.triples);
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// `true` when the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// `true` when the triple is present.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    /// Triples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Objects of `(subject, predicate, _)`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Subject,
        predicate: &'a Iri,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && &t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of `(_, predicate, object)`.
    pub fn subjects<'a>(
        &'a self,
        predicate: &'a Iri,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Subject> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate && &t.object == object)
            .map(|t| &t.subject)
    }

    /// Distinct subjects in first-seen order.
    #[must_use]
    pub fn distinct_subjects(&self) -> Vec<&Subject> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::namespaces::{crm, rdf, rdfs};

    fn e55() -> Iri {
        Iri::new("https://clscor.io/entity/e55")
    }

    #[test]
    fn duplicates_are_absorbed() {
        let mut graph = Graph::new();
        assert!(graph.add(Triple::new(e55(), rdf::TYPE, crm::E55_TYPE)));
        assert!(!graph.add(Triple::new(e55(), rdf::TYPE, crm::E55_TYPE)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn insertion_order_is_kept() {
        let graph: Graph = [
            Triple::new(e55(), rdfs::LABEL, Literal::string("b")),
            Triple::new(e55(), rdf::TYPE, crm::E55_TYPE),
            Triple::new(e55(), rdfs::LABEL, Literal::string("b")),
        ]
        .into_iter()
        .collect();
        let predicates: Vec<_> = graph.iter().map(|t| t.predicate.clone()).collect();
        assert_eq!(predicates, vec![rdfs::LABEL, rdf::TYPE]);
    }

    #[test]
    fn pattern_lookups() {
        let graph: Graph = [Triple::new(e55(), rdf::TYPE, crm::E55_TYPE)].into_iter().collect();
        let subject = Subject::from(e55());
        let object = Term::from(crm::E55_TYPE);
        assert_eq!(graph.objects(&subject, &rdf::TYPE).count(), 1);
        assert_eq!(graph.subjects(&rdf::TYPE, &object).next(), Some(&subject));
        assert_eq!(graph.distinct_subjects(), vec![&subject]);
    }
}
