//! Turtle 1.1 serializer.
//!
//! Writes `@prefix` declarations for the given namespaces, then one block per
//! subject in first-seen order. IRIs inside a known namespace are abbreviated
//! when their local part is a plain name; `rdf:type` is written as `a`.

use std::collections::HashMap;

use crate::graph::Graph;
use crate::model::{escape_string, Datatype, Iri, Literal, Subject, Term, Triple};
use crate::namespaces::{rdf, Namespace};

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph, namespaces: &[Namespace]) -> String {
    let mut out = String::with_capacity(graph.len() * 96 + 1024);

    let width = namespaces.iter().map(|ns| ns.prefix.len()).max().unwrap_or(0) + 1;
    for ns in namespaces {
        out.push_str(&format!(
            "@prefix {:<width$} <{}> .\n",
            format!("{}:", ns.prefix),
            ns.iri
        ));
    }
    if !namespaces.is_empty() {
        out.push('\n');
    }

    let mut order: Vec<&Subject> = Vec::new();
    let mut blocks: HashMap<&Subject, Vec<&Triple>> = HashMap::new();
    for triple in graph {
        blocks
            .entry(&triple.subject)
            .or_insert_with(|| {
                order.push(&triple.subject);
                Vec::new()
            })
            .push(triple);
    }

    for subject in order {
        let Some(triples) = blocks.get(subject) else {
            continue;
        };
        out.push_str(&subject_to_turtle(subject, namespaces));
        for (i, triple) in triples.iter().enumerate() {
            let terminator = if i + 1 == triples.len() { " ." } else { " ;" };
            out.push_str(&format!(
                "\n  {} {}{}",
                predicate_to_turtle(&triple.predicate, namespaces),
                term_to_turtle(&triple.object, namespaces),
                terminator
            ));
        }
        out.push_str("\n\n");
    }

    out
}

fn subject_to_turtle(subject: &Subject, namespaces: &[Namespace]) -> String {
    match subject {
        Subject::Iri(iri) => iri_to_turtle(iri, namespaces),
        Subject::Blank(node) => node.to_string(),
    }
}

fn predicate_to_turtle(predicate: &Iri, namespaces: &[Namespace]) -> String {
    if *predicate == rdf::TYPE {
        "a".to_owned()
    } else {
        iri_to_turtle(predicate, namespaces)
    }
}

fn term_to_turtle(term: &Term, namespaces: &[Namespace]) -> String {
    match term {
        Term::Iri(iri) => iri_to_turtle(iri, namespaces),
        Term::Blank(node) => node.to_string(),
        Term::Literal(literal) => literal_to_turtle(literal, namespaces),
    }
}

fn literal_to_turtle(literal: &Literal, namespaces: &[Namespace]) -> String {
    let escaped = escape_string(literal.lexical());
    match literal.datatype() {
        Datatype::String => format!("\"{escaped}\""),
        Datatype::LangString(tag) => format!("\"{escaped}\"@{tag}"),
        other => format!(
            "\"{escaped}\"^^{}",
            iri_to_turtle(&Iri::new(other.iri()), namespaces)
        ),
    }
}

fn iri_to_turtle(iri: &Iri, namespaces: &[Namespace]) -> String {
    for ns in namespaces {
        if let Some(local) = iri.local_name(ns.iri) {
            if is_plain_local_name(local) {
                return format!("{}:{}", ns.prefix, local);
            }
        }
    }
    format!("<{}>", iri.as_str())
}

/// A conservative subset of Turtle's `PN_LOCAL`: no escapes, no dots, no colons.
fn is_plain_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
