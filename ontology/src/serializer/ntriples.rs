//! N-Triples serializer.
//!
//! Produces one triple per line with absolute IRIs. `xsd:string` literals are
//! written without an explicit datatype.

use crate::graph::Graph;

/// Serializes `graph` to an N-Triples string, in insertion order.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for triple in graph {
        out.push_str(&triple.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlankNode, Iri, Literal, Triple};
    use crate::namespaces::{crm, rdf};

    fn sample() -> Graph {
        let x2 = Iri::new("https://clscor.io/entity/x2");
        let node = BlankNode::fresh();
        [
            Triple::new(x2.clone(), rdf::TYPE, Iri::new("https://clscor.io/ontologies/CRMcls/X2_Corpus_Document")),
            Triple::new(x2, crm::P1_IS_IDENTIFIED_BY, node.clone()),
            Triple::new(node, crm::P190_HAS_SYMBOLIC_CONTENT, Literal::integer(1342u64)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(&sample());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn one_line_per_triple() {
        assert_eq!(to_ntriples(&sample()).lines().count(), 3);
    }

    #[test]
    fn typed_literals_carry_datatype() {
        let nt = to_ntriples(&sample());
        assert!(nt.contains("\"1342\"^^<http://www.w3.org/2001/XMLSchema#integer>"));
    }
}
