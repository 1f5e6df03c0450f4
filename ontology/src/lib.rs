//! CLSCor graph building blocks.
//!
//! The `clscor-ontology` crate holds everything the corpus generators need to
//! produce CLSCor graphs, independent of any particular corpus:
//!
//! - [`model`]: RDF terms and triples
//! - [`namespaces`]: typed IRI constants for CRM, LRMoo, CRMcls, CRMdig and
//!   the CLSCor entity namespace
//! - [`fragment`]: the graph fragment builder
//! - [`mint`]: random and deterministic entity URI allocation
//! - [`graph`]: the insertion-ordered graph accumulator
//! - [`serializer`]: Turtle and N-Triples output
//! - `reader` (feature `reader`): Turtle and N-Triples input via sophia
//!
//! # Example
//!
//! ```
//! use clscor_ontology::fragment::{lit, Fragment};
//! use clscor_ontology::mint::Minter;
//! use clscor_ontology::namespaces::{crm, rdf, rdfs};
//! use clscor_ontology::{Graph, RdfFormat};
//!
//! let minter = Minter::default();
//! let e55 = minter.hashed("ELTeC Title");
//! let graph: Graph = Fragment::new(e55)
//!     .with(rdf::TYPE, crm::E55_TYPE)
//!     .with(rdfs::LABEL, lit("ELTeC Work Title"))
//!     .into_iter()
//!     .collect();
//!
//! let turtle = RdfFormat::Turtle.serialize(&graph);
//! assert!(turtle.contains("a crm:E55_Type"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fragment;
pub mod graph;
pub mod mint;
pub mod model;
pub mod namespaces;
#[cfg(feature = "reader")]
pub mod reader;
pub mod serializer;

pub use fragment::{Fragment, Object, Pair};
pub use graph::Graph;
pub use mint::Minter;
pub use model::{BlankNode, Datatype, Iri, Literal, Subject, Term, Triple};
pub use serializer::RdfFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{blank, fan_out, lit};
    use crate::namespaces::{crm, lrmoo, rdf, rdfs};

    #[test]
    fn fragment_into_graph_into_ntriples() {
        let minter = Minter::default();
        let f1 = minter.random();
        let f2 = minter.random();
        let graph: Graph = Fragment::new(f1.clone())
            .with(rdf::TYPE, lrmoo::F1_WORK)
            .with(rdfs::LABEL, lit("Foo [Work]"))
            .with(lrmoo::R3_IS_REALISED_IN, fan_out([f2]))
            .with(
                crm::P1_IS_IDENTIFIED_BY,
                blank().with(rdf::TYPE, crm::E42_IDENTIFIER),
            )
            .into_iter()
            .collect();
        assert_eq!(graph.len(), 5);
        let nt = RdfFormat::NTriples.serialize(&graph);
        assert_eq!(nt.lines().count(), 5);
        assert!(nt.starts_with(&format!("{f1} ")));
    }

    #[cfg(feature = "reader")]
    #[test]
    fn serialized_turtle_reparses_to_same_size() {
        let minter = Minter::default();
        let graph: Graph = Fragment::new(minter.random())
            .with(rdf::TYPE, crm::E52_TIME_SPAN)
            .with(crm::P82_AT_SOME_TIME_WITHIN, Literal::g_year("1901"))
            .with(crm::P1_IS_IDENTIFIED_BY, blank().with(rdfs::LABEL, lit("a\nb")))
            .into_iter()
            .collect();
        for format in [RdfFormat::Turtle, RdfFormat::NTriples] {
            let text = format.serialize(&graph);
            let parsed = reader::read(format, &text).unwrap();
            assert_eq!(parsed.len(), graph.len(), "{format}");
        }
    }
}
