//! Graph fragment builder.
//!
//! A [`Fragment`] is a subject plus an ordered list of `(predicate, object)`
//! pairs. Expanding it yields flat [`Triple`]s. Objects come in five shapes
//! (see [`Object`]):
//!
//! - a plain term emits one triple;
//! - a fan-out emits one triple per element, all sharing the predicate;
//! - a nested pair list materializes as a fresh blank node;
//! - a lazy pair iterator behaves like a nested list and is drained once;
//! - a named node (another fragment) links to its subject, then emits its pairs.
//!
//! Triples come out depth-first in input order: a nested entity's triples
//! follow the triple that links it and precede the parent's next pair.
//!
//! ```
//! use clscor_ontology::fragment::{blank, fan_out, lit, Fragment};
//! use clscor_ontology::model::Iri;
//! use clscor_ontology::namespaces::{crm, rdf, rdfs};
//!
//! let actor = Iri::new("https://clscor.io/entity/actor");
//! let triples: Vec<_> = Fragment::new(actor)
//!     .with(rdf::TYPE, crm::E39_ACTOR)
//!     .with(rdfs::LABEL, lit("Bar Baz [Actor]"))
//!     .with(
//!         crm::P1_IS_IDENTIFIED_BY,
//!         blank()
//!             .with(rdf::TYPE, crm::E41_APPELLATION)
//!             .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit("Bar Baz")),
//!     )
//!     .with(crm::P14I_PERFORMED, fan_out(Vec::<Iri>::new()))
//!     .into_iter()
//!     .collect();
//! assert_eq!(triples.len(), 5);
//! ```

use std::fmt;

use crate::model::{BlankNode, Iri, Literal, Subject, Term, Triple};

/// One `(predicate, object)` pair of a fragment.
pub type Pair = (Iri, Object);

/// The object half of a [`Pair`].
pub enum Object {
    /// A single term: one triple.
    Term(Term),
    /// Several objects sharing one predicate, expanded in element order.
    FanOut(Vec<Object>),
    /// An anonymous entity: a fresh blank node described by the pairs.
    Nested(Vec<Pair>),
    /// Like [`Object::Nested`], drained lazily during expansion.
    Lazy(Box<dyn Iterator<Item = Pair> + Send>),
    /// A named entity declared inline: links to its subject, then emits its pairs.
    Node(Fragment),
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Term(term) => f.debug_tuple("Term").field(term).finish(),
            Object::FanOut(objects) => f.debug_tuple("FanOut").field(objects).finish(),
            Object::Nested(pairs) => f.debug_tuple("Nested").field(pairs).finish(),
            Object::Lazy(_) => f.write_str("Lazy(..)"),
            Object::Node(fragment) => f.debug_tuple("Node").field(fragment).finish(),
        }
    }
}

impl From<Term> for Object {
    fn from(term: Term) -> Self {
        Object::Term(term)
    }
}

impl From<Iri> for Object {
    fn from(iri: Iri) -> Self {
        Object::Term(Term::Iri(iri))
    }
}

impl From<&Iri> for Object {
    fn from(iri: &Iri) -> Self {
        Object::Term(Term::Iri(iri.clone()))
    }
}

impl From<BlankNode> for Object {
    fn from(node: BlankNode) -> Self {
        Object::Term(Term::Blank(node))
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Term(Term::Literal(literal))
    }
}

impl From<Subject> for Object {
    fn from(subject: Subject) -> Self {
        Object::Term(subject.into())
    }
}

impl From<Fragment> for Object {
    fn from(fragment: Fragment) -> Self {
        Object::Node(fragment)
    }
}

impl From<Blank> for Object {
    fn from(blank: Blank) -> Self {
        Object::Nested(blank.pairs)
    }
}

/// An `xsd:string` literal object.
#[must_use]
pub fn lit(value: impl Into<String>) -> Object {
    Literal::string(value).into()
}

/// A fan-out object: one triple per item.
#[must_use]
pub fn fan_out<I>(items: I) -> Object
where
    I: IntoIterator,
    I::Item: Into<Object>,
{
    Object::FanOut(items.into_iter().map(Into::into).collect())
}

/// A lazily expanded anonymous entity.
#[must_use]
pub fn lazy<I>(pairs: I) -> Object
where
    I: IntoIterator<Item = Pair>,
    I::IntoIter: Send + 'static,
{
    Object::Lazy(Box::new(pairs.into_iter()))
}

/// Starts an anonymous entity (materialized as a fresh blank node).
#[must_use]
pub fn blank() -> Blank {
    Blank::default()
}

/// Builder for an anonymous entity's pairs. Converts into [`Object::Nested`].
#[derive(Debug, Default)]
pub struct Blank {
    pairs: Vec<Pair>,
}

impl Blank {
    /// Appends a pair.
    #[must_use]
    pub fn with(mut self, predicate: impl Into<Iri>, object: impl Into<Object>) -> Self {
        self.pairs.push((predicate.into(), object.into()));
        self
    }

    /// Appends a pair when `object` is present; otherwise leaves the builder unchanged.
    #[must_use]
    pub fn with_opt<O: Into<Object>>(self, predicate: impl Into<Iri>, object: Option<O>) -> Self {
        match object {
            Some(object) => self.with(predicate, object),
            None => self,
        }
    }
}

/// A subject with its ordered pairs.
#[derive(Debug)]
pub struct Fragment {
    subject: Subject,
    pairs: Vec<Pair>,
}

impl Fragment {
    /// Starts a fragment about `subject`.
    #[must_use]
    pub fn new(subject: impl Into<Subject>) -> Self {
        Self {
            subject: subject.into(),
            pairs: Vec::new(),
        }
    }

    /// Appends a pair.
    #[must_use]
    pub fn with(mut self, predicate: impl Into<Iri>, object: impl Into<Object>) -> Self {
        self.push(predicate, object);
        self
    }

    /// Appends a pair when `object` is present; otherwise leaves the fragment unchanged.
    #[must_use]
    pub fn with_opt<O: Into<Object>>(self, predicate: impl Into<Iri>, object: Option<O>) -> Self {
        match object {
            Some(object) => self.with(predicate, object),
            None => self,
        }
    }

    /// Appends a pair in place.
    pub fn push(&mut self, predicate: impl Into<Iri>, object: impl Into<Object>) {
        self.pairs.push((predicate.into(), object.into()));
    }

    /// The fragment's subject.
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Number of top-level pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when the fragment has no pairs and therefore expands to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Expands the fragment into triples.
    #[must_use]
    pub fn into_triples(self) -> Expand {
        expand(self.subject, self.pairs)
    }
}

impl IntoIterator for Fragment {
    type Item = Triple;
    type IntoIter = Expand;

    fn into_iter(self) -> Expand {
        self.into_triples()
    }
}

/// Expands `subject` against `pairs`.
///
/// The returned iterator is lazy: nested and lazy objects are only walked as
/// triples are pulled.
#[must_use]
pub fn expand<S, I>(subject: S, pairs: I) -> Expand
where
    S: Into<Subject>,
    I: IntoIterator<Item = Pair>,
    I::IntoIter: Send + 'static,
{
    Expand {
        stack: vec![Frame {
            subject: subject.into(),
            pairs: Box::new(pairs.into_iter()),
        }],
    }
}

/// Expands fragments one after another.
pub fn expand_all<I>(fragments: I) -> impl Iterator<Item = Triple>
where
    I: IntoIterator<Item = Fragment>,
{
    fragments.into_iter().flat_map(Fragment::into_triples)
}

struct Frame {
    subject: Subject,
    pairs: Box<dyn Iterator<Item = Pair> + Send>,
}

/// Depth-first triple iterator returned by [`expand`].
pub struct Expand {
    stack: Vec<Frame>,
}

impl fmt::Debug for Expand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expand").field("depth", &self.stack.len()).finish()
    }
}

impl Expand {
    fn descend(&mut self, subject: Subject, pairs: Box<dyn Iterator<Item = Pair> + Send>) {
        self.stack.push(Frame { subject, pairs });
    }
}

impl Iterator for Expand {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((predicate, object)) = frame.pairs.next() else {
                self.stack.pop();
                continue;
            };
            let subject = frame.subject.clone();
            match object {
                Object::Term(object) => {
                    return Some(Triple {
                        subject,
                        predicate,
                        object,
                    })
                }
                Object::FanOut(objects) => {
                    let pairs = objects.into_iter().map(move |o| (predicate.clone(), o));
                    self.descend(subject, Box::new(pairs));
                }
                Object::Nested(pairs) => {
                    let node = BlankNode::fresh();
                    self.descend(Subject::Blank(node.clone()), Box::new(pairs.into_iter()));
                    return Some(Triple::new(subject, predicate, node));
                }
                Object::Lazy(pairs) => {
                    let node = BlankNode::fresh();
                    self.descend(Subject::Blank(node.clone()), pairs);
                    return Some(Triple::new(subject, predicate, node));
                }
                Object::Node(fragment) => {
                    let object = Term::from(fragment.subject.clone());
                    self.descend(fragment.subject, Box::new(fragment.pairs.into_iter()));
                    return Some(Triple {
                        subject,
                        predicate,
                        object,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::{crm, rdf};

    fn s() -> Iri {
        Iri::new("https://clscor.io/entity/s")
    }

    fn p(n: u8) -> Iri {
        Iri::new(format!("http://example.org/p{n}"))
    }

    fn o(n: u8) -> Iri {
        Iri::new(format!("http://example.org/o{n}"))
    }

    #[test]
    fn empty_pairs_expand_to_nothing() {
        assert_eq!(expand(s(), Vec::new()).count(), 0);
        assert!(Fragment::new(s()).is_empty());
    }

    #[test]
    fn scalar_emits_one_triple() {
        let triples: Vec<_> = Fragment::new(s()).with(p(1), lit("lit")).into_iter().collect();
        assert_eq!(triples, vec![Triple::new(s(), p(1), Literal::string("lit"))]);
    }

    #[test]
    fn fan_out_preserves_order() {
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), fan_out([o(1), o(2), o(3)]))
            .into_iter()
            .collect();
        assert_eq!(
            triples,
            vec![
                Triple::new(s(), p(1), o(1)),
                Triple::new(s(), p(1), o(2)),
                Triple::new(s(), p(1), o(3)),
            ]
        );
    }

    #[test]
    fn empty_fan_out_emits_nothing() {
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), fan_out(Vec::<Iri>::new()))
            .with(p(2), o(2))
            .into_iter()
            .collect();
        assert_eq!(triples, vec![Triple::new(s(), p(2), o(2))]);
    }

    #[test]
    fn nested_list_materializes_fresh_blank_node() {
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), blank().with(p(2), lit("x")))
            .into_iter()
            .collect();
        assert_eq!(triples.len(), 2);
        let node = triples[0].object.as_blank().cloned().expect("blank object");
        assert_eq!(triples[0].subject, Subject::from(s()));
        assert_eq!(triples[1].subject, Subject::Blank(node));
        assert_eq!(triples[1].object, Term::from(Literal::string("x")));
    }

    #[test]
    fn sibling_nested_lists_get_distinct_blank_nodes() {
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), fan_out([blank().with(p(2), o(1)), blank().with(p(2), o(2))]))
            .into_iter()
            .collect();
        let nodes: Vec<_> = triples
            .iter()
            .filter(|t| t.predicate == p(1))
            .filter_map(|t| t.object.as_blank())
            .collect();
        assert_eq!(nodes.len(), 2);
        assert_ne!(nodes[0], nodes[1]);
    }

    #[test]
    fn nested_triples_precede_next_parent_pair() {
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), blank().with(p(2), o(2)).with(p(3), o(3)))
            .with(p(4), o(4))
            .into_iter()
            .collect();
        let predicates: Vec<_> = triples.iter().map(|t| t.predicate.clone()).collect();
        assert_eq!(predicates, vec![p(1), p(2), p(3), p(4)]);
    }

    #[test]
    fn deep_nesting_links_each_level() {
        let inner = blank().with(p(4), lit("innermost"));
        let triples: Vec<_> = Fragment::new(s())
            .with(p(1), blank().with(p(2), blank().with(p(3), inner)))
            .into_iter()
            .collect();
        assert_eq!(triples.len(), 4);

        // Walk from the root through the chain of blank nodes.
        let mut current = Subject::from(s());
        for t in &triples[..3] {
            assert_eq!(t.subject, current);
            current = t.object.to_subject().expect("linking object");
        }
        assert_eq!(triples[3].subject, current);
        assert_eq!(triples[3].object, Term::from(Literal::string("innermost")));
    }

    #[test]
    fn lazy_pairs_behave_like_nested_list() {
        let pairs = (1..=3).map(|n| (p(n), Object::from(o(n))));
        let triples: Vec<_> = Fragment::new(s()).with(p(9), lazy(pairs)).into_iter().collect();
        assert_eq!(triples.len(), 4);
        let node = triples[0].object.to_subject().expect("blank node");
        assert!(triples[1..].iter().all(|t| t.subject == node));
    }

    #[test]
    fn named_node_links_then_describes() {
        let appellation = Iri::new("https://clscor.io/entity/appellation");
        let triples: Vec<_> = Fragment::new(s())
            .with(
                crm::P1_IS_IDENTIFIED_BY,
                Fragment::new(appellation.clone()).with(rdf::TYPE, crm::E41_APPELLATION),
            )
            .into_iter()
            .collect();
        assert_eq!(
            triples,
            vec![
                Triple::new(s(), crm::P1_IS_IDENTIFIED_BY, appellation.clone()),
                Triple::new(appellation, rdf::TYPE, crm::E41_APPELLATION),
            ]
        );
    }

    #[test]
    fn absent_optional_pair_is_skipped() {
        let missing: Option<Object> = None;
        let triples: Vec<_> = Fragment::new(s())
            .with_opt(p(1), missing)
            .with_opt(p(2), Some(lit("present")))
            .into_iter()
            .collect();
        assert_eq!(triples, vec![Triple::new(s(), p(2), Literal::string("present"))]);
    }

    #[test]
    fn expand_all_chains_fragments() {
        let fragments = vec![
            Fragment::new(s()).with(p(1), o(1)),
            Fragment::new(o(1)).with(p(2), o(2)),
        ];
        assert_eq!(expand_all(fragments).count(), 2);
    }
}
