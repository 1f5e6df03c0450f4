//! Graph structure validator.
//!
//! - every blank node used as an object is described (failure otherwise)
//! - every blank node subject is referenced (warning otherwise)
//! - every named subject has an `rdf:type` (warning otherwise)
//! - every typed named subject has an `rdfs:label` (warning otherwise)

use std::collections::HashSet;

use clscor_ontology::model::{BlankNode, Subject};
use clscor_ontology::namespaces::{rdf, rdfs};

use super::syntax::Artifact;
use crate::report::{limit, ConformanceReport, TestResult};

const VALIDATOR: &str = "structure";

/// Checks blank-node closure and entity typing of `artifact`.
pub fn validate(artifact: &Artifact) -> ConformanceReport {
    let name = artifact.name();
    let graph = &artifact.graph;
    let mut report = ConformanceReport::new();

    let described: HashSet<&BlankNode> = graph.iter().filter_map(|t| t.subject.as_blank()).collect();
    let referenced: HashSet<&BlankNode> = graph.iter().filter_map(|t| t.object.as_blank()).collect();

    let mut dangling: Vec<_> = referenced.difference(&described).map(ToString::to_string).collect();
    dangling.sort();
    if dangling.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: every referenced blank node is described"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: {} dangling blank node(s)", dangling.len()),
            limit(dangling),
        ));
    }

    let mut orphans: Vec<_> = described.difference(&referenced).map(ToString::to_string).collect();
    orphans.sort();
    if !orphans.is_empty() {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} unreferenced blank node subject(s)", orphans.len()),
            limit(orphans),
        ));
    }

    let typed: HashSet<&Subject> = graph
        .iter()
        .filter(|t| t.predicate == rdf::TYPE)
        .map(|t| &t.subject)
        .collect();
    let labelled: HashSet<&Subject> = graph
        .iter()
        .filter(|t| t.predicate == rdfs::LABEL)
        .map(|t| &t.subject)
        .collect();

    let mut untyped = Vec::new();
    let mut unlabelled = Vec::new();
    for subject in graph.distinct_subjects() {
        if subject.as_iri().is_none() {
            continue;
        }
        if !typed.contains(subject) {
            untyped.push(subject.to_string());
        } else if !labelled.contains(subject) {
            unlabelled.push(subject.to_string());
        }
    }

    if untyped.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: every named subject is typed"),
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} named subject(s) without rdf:type", untyped.len()),
            limit(untyped),
        ));
    }
    if !unlabelled.is_empty() {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} typed subject(s) without rdfs:label", unlabelled.len()),
            limit(unlabelled),
        ));
    }

    report
}
