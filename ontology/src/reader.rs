//! Turtle and N-Triples parsing, backed by sophia.
//!
//! Parsed documents are converted into this crate's [`Graph`] so vocabulary
//! files and generated artifacts can be inspected with the same types the
//! generators emit. Blank node labels are kept as written in the document.

use sophia_api::source::TripleSource;
use sophia_api::term::TermKind;
use sophia_turtle::parser::{nt, turtle};

use crate::graph::Graph;
use crate::model::{BlankNode, Datatype, Iri, Literal, Term, Triple};
use crate::serializer::RdfFormat;

/// Errors raised while reading RDF.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The document is not syntactically valid.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// The document uses a term this model cannot represent (e.g. RDF-star).
    #[error("unsupported term in {position} position")]
    UnsupportedTerm {
        /// Triple position of the offending term.
        position: &'static str,
    },
}

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns [`ReadError::Syntax`] for malformed input and
/// [`ReadError::UnsupportedTerm`] for terms outside the RDF 1.1 model.
pub fn read_turtle(source: &str) -> Result<Graph, ReadError> {
    collect(turtle::parse_str(source))
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Same as [`read_turtle`].
pub fn read_ntriples(source: &str) -> Result<Graph, ReadError> {
    collect(nt::parse_str(source))
}

/// Parses `source` in the given format.
///
/// # Errors
///
/// Same as [`read_turtle`].
pub fn read(format: RdfFormat, source: &str) -> Result<Graph, ReadError> {
    match format {
        RdfFormat::Turtle => read_turtle(source),
        RdfFormat::NTriples => read_ntriples(source),
    }
}

fn collect<S: TripleSource>(mut source: S) -> Result<Graph, ReadError> {
    let mut graph = Graph::new();
    let mut failure = None;
    source
        .for_each_triple(|t| match convert_triple(&t) {
            Ok(triple) => {
                graph.add(triple);
            }
            Err(err) => {
                failure.get_or_insert(err);
            }
        })
        .map_err(|err| ReadError::Syntax(err.to_string()))?;
    match failure {
        Some(err) => Err(err),
        None => Ok(graph),
    }
}

fn convert_triple<T: sophia_api::triple::Triple>(t: &T) -> Result<Triple, ReadError> {
    let subject = convert_term(t.s())
        .and_then(|term| term.to_subject())
        .ok_or(ReadError::UnsupportedTerm { position: "subject" })?;
    let predicate = convert_term(t.p())
        .and_then(|term| term.as_iri().cloned())
        .ok_or(ReadError::UnsupportedTerm { position: "predicate" })?;
    let object = convert_term(t.o()).ok_or(ReadError::UnsupportedTerm { position: "object" })?;
    Ok(Triple {
        subject,
        predicate,
        object,
    })
}

fn convert_term<T: sophia_api::term::Term>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(Iri::new(iri.as_str()))),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::Blank(BlankNode::labelled(id.as_str()))),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let datatype = match term.language_tag() {
                Some(tag) => Datatype::LangString(tag.as_str().to_owned()),
                None => term
                    .datatype()
                    .map(|dt| Datatype::from_iri(dt.as_str()))
                    .unwrap_or(Datatype::String),
            };
            Some(Term::Literal(Literal::typed(lexical, datatype)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;
    use crate::namespaces::{crm, rdf, rdfs};

    const VOCAB: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .

<https://clscor.io/entity/type/identifier/viaf>
    a skos:Concept ;
    rdfs:label "VIAF" , "viaf"@en .
"#;

    #[test]
    fn parses_turtle_into_model() {
        let graph = read_turtle(VOCAB).unwrap();
        assert_eq!(graph.len(), 3);
        let subject = Subject::from(Iri::new("https://clscor.io/entity/type/identifier/viaf"));
        let label = rdfs::LABEL;
        let labels: Vec<_> = graph
            .objects(&subject, &label)
            .filter_map(Term::as_literal)
            .collect();
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().any(|l| l.lexical() == "VIAF" && *l.datatype() == Datatype::String));
        assert!(labels
            .iter()
            .any(|l| *l.datatype() == Datatype::LangString("en".to_owned())));
    }

    #[test]
    fn parses_ntriples_with_blank_nodes() {
        let nt = "<https://clscor.io/entity/x> <http://www.cidoc-crm.org/cidoc-crm/P1_is_identified_by> _:id .\n\
                  _:id <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.cidoc-crm.org/cidoc-crm/E42_Identifier> .\n";
        let graph = read_ntriples(nt).unwrap();
        assert_eq!(graph.len(), 2);
        let node = Subject::Blank(BlankNode::labelled("id"));
        let rdf_type = rdf::TYPE;
        let types: Vec<_> = graph.objects(&node, &rdf_type).collect();
        assert_eq!(types, vec![&Term::from(crm::E42_IDENTIFIER)]);
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(
            read_turtle("<http://example.org/s> <http://example.org/p> ."),
            Err(ReadError::Syntax(_))
        ));
    }
}
