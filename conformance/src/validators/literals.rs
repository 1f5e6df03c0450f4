//! Literal validator.
//!
//! - no literal is empty
//! - `xsd:gYear`, `xsd:integer` and `xsd:anyURI` literals have valid lexical forms
//! - plain strings carry no leading or trailing whitespace (warning)

use anyhow::Result;
use clscor_ontology::model::{Datatype, Literal, Term};
use regex::Regex;

use super::syntax::Artifact;
use crate::report::{limit, ConformanceReport, TestResult};

const VALIDATOR: &str = "literals";

struct LexicalForms {
    g_year: Regex,
    integer: Regex,
    any_uri: Regex,
}

impl LexicalForms {
    fn new() -> Result<Self> {
        Ok(Self {
            g_year: Regex::new(r"^-?[0-9]{4,}$")?,
            integer: Regex::new(r"^[+-]?[0-9]+$")?,
            any_uri: Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>]+$")?,
        })
    }

    fn accepts(&self, literal: &Literal) -> bool {
        let lexical = literal.lexical();
        match literal.datatype() {
            Datatype::GYear => self.g_year.is_match(lexical),
            Datatype::Integer => self.integer.is_match(lexical),
            Datatype::AnyUri => self.any_uri.is_match(lexical),
            _ => true,
        }
    }
}

/// Checks every literal object of `artifact`.
///
/// # Errors
///
/// Returns an error if the lexical-form patterns fail to compile.
pub fn validate(artifact: &Artifact) -> Result<ConformanceReport> {
    let forms = LexicalForms::new()?;
    let name = artifact.name();
    let mut report = ConformanceReport::new();

    let mut empty = Vec::new();
    let mut malformed = Vec::new();
    let mut padded = Vec::new();
    let mut checked = 0usize;

    for triple in artifact.graph.iter() {
        let Term::Literal(literal) = &triple.object else {
            continue;
        };
        checked += 1;
        if literal.lexical().is_empty() {
            empty.push(triple.to_string());
        } else if !forms.accepts(literal) {
            malformed.push(triple.to_string());
        } else if literal.lexical().trim() != literal.lexical() {
            padded.push(triple.to_string());
        }
    }

    if empty.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: no empty literals among {checked}"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: {} empty literal(s)", empty.len()),
            limit(empty),
        ));
    }

    if malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: typed literals have valid lexical forms"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: {} literal(s) invalid for their datatype", malformed.len()),
            limit(malformed),
        ));
    }

    if !padded.is_empty() {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{name}: {} literal(s) with surrounding whitespace", padded.len()),
            limit(padded),
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use clscor_ontology::model::{Iri, Triple};
    use clscor_ontology::{Graph, RdfFormat};

    use super::*;

    fn artifact(objects: Vec<Literal>) -> Artifact {
        let subject = Iri::new("https://clscor.io/entity/x");
        let predicate = Iri::new("http://www.cidoc-crm.org/cidoc-crm/P190_has_symbolic_content");
        Artifact {
            path: "test.ttl".into(),
            format: RdfFormat::Turtle,
            graph: objects
                .into_iter()
                .map(|o| Triple::new(subject.clone(), predicate.clone(), o))
                .collect::<Graph>(),
        }
    }

    #[test]
    fn well_formed_literals_pass() {
        let report = validate(&artifact(vec![
            Literal::string("Foo"),
            Literal::g_year("1847"),
            Literal::g_year("-0044"),
            Literal::integer(12_345),
            Literal::any_uri("https://www.gutenberg.org/ebooks/84"),
        ]))
        .unwrap();
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 0);
    }

    #[test]
    fn empty_literal_fails() {
        let report = validate(&artifact(vec![Literal::string("")])).unwrap();
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn bad_lexical_forms_fail() {
        let report = validate(&artifact(vec![
            Literal::g_year("47"),
            Literal::typed("12a", Datatype::Integer),
            Literal::any_uri("not a uri"),
        ]))
        .unwrap();
        let failure = report.results.iter().find(|r| r.is_failure()).unwrap();
        assert!(failure.message.contains("3 literal(s)"));
    }

    #[test]
    fn padded_string_warns() {
        let report = validate(&artifact(vec![Literal::string(" Foo")])).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.warning_count(), 1);
    }
}
