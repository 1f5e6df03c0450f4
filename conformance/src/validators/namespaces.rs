//! Namespace usage validator.
//!
//! Predicates and classes must come from the namespaces the CLSCor model is
//! built on. Anything else is most likely a typo in a generator and is
//! reported as a warning; a literal in the `rdf:type` position is a failure.

use std::collections::BTreeSet;

use clscor_ontology::model::Term;
use clscor_ontology::namespaces::{self, rdf};

use super::syntax::Artifact;
use crate::report::{limit, ConformanceReport, TestResult};

const VALIDATOR: &str = "namespaces";

fn is_known(iri: &str) -> bool {
    namespaces::all().iter().any(|ns| iri.starts_with(ns.iri))
}

/// Checks the predicates and classes used by `artifact`.
pub fn validate(artifact: &Artifact) -> ConformanceReport {
    let name = artifact.name();
    let mut report = ConformanceReport::new();

    let mut unknown_predicates = BTreeSet::new();
    let mut unknown_classes = BTreeSet::new();
    let mut literal_types = Vec::new();

    for triple in artifact.graph.iter() {
        if !is_known(triple.predicate.as_str()) {
            unknown_predicates.insert(triple.predicate.to_string());
        }
        if triple.predicate != rdf::TYPE {
            continue;
        }
        match &triple.object {
            Term::Iri(class) if !is_known(class.as_str()) => {
                unknown_classes.insert(class.to_string());
            }
            Term::Literal(_) => literal_types.push(triple.to_string()),
            _ => {}
        }
    }

    if unknown_predicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: all predicates are in known namespaces"),
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} predicate(s) outside known namespaces", unknown_predicates.len()),
            limit(unknown_predicates.into_iter().collect()),
        ));
    }

    if unknown_classes.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: all classes are in known namespaces"),
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} class(es) outside known namespaces", unknown_classes.len()),
            limit(unknown_classes.into_iter().collect()),
        ));
    }

    if !literal_types.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: {} rdf:type statement(s) with a literal object", literal_types.len()),
            limit(literal_types),
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use clscor_ontology::model::{Iri, Literal, Triple};
    use clscor_ontology::namespaces::{crm, lrmoo, rdfs};
    use clscor_ontology::{Graph, RdfFormat};

    use super::*;

    fn artifact(triples: Vec<Triple>) -> Artifact {
        Artifact {
            path: "test.ttl".into(),
            format: RdfFormat::Turtle,
            graph: triples.into_iter().collect::<Graph>(),
        }
    }

    fn work() -> Iri {
        Iri::new("https://clscor.io/entity/w")
    }

    #[test]
    fn model_terms_pass() {
        let report = validate(&artifact(vec![
            Triple::new(work(), rdf::TYPE, lrmoo::F1_WORK),
            Triple::new(work(), rdfs::LABEL, Literal::string("Foo [Work]")),
            Triple::new(work(), crm::P2_HAS_TYPE, Iri::new("https://clscor.io/entity/t")),
        ]));
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn foreign_terms_warn() {
        let report = validate(&artifact(vec![
            Triple::new(work(), rdf::TYPE, Iri::new("http://schema.org/Book")),
            Triple::new(work(), Iri::new("http://purl.org/dc/terms/title"), Literal::string("Foo")),
        ]));
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 2);
    }

    #[test]
    fn literal_class_fails() {
        let report = validate(&artifact(vec![Triple::new(work(), rdf::TYPE, Literal::string("Work"))]));
        assert_eq!(report.failure_count(), 1);
    }
}
