//! Namespace IRIs used by CLSCor graphs.
//!
//! Each sub-module holds the typed [`Iri`](crate::model::Iri) constants of one
//! namespace. [`all`] lists the namespaces known to the Turtle serializer, in
//! the order their prefixes are declared.

/// Declares `NS` plus one `Iri` constant per local name of a namespace.
macro_rules! terms {
    ($ns:literal; $($name:ident = $local:literal),* $(,)?) => {
        /// The namespace IRI.
        pub const NS: &str = $ns;
        $(
            #[doc = concat!("`", $ns, $local, "`")]
            pub const $name: $crate::model::Iri =
                $crate::model::Iri::from_static(concat!($ns, $local));
        )*
    };
}

pub mod clscor;
pub mod crm;
pub mod crmcls;
pub mod crmdig;
pub mod iso6391;
pub mod lrmoo;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod xsd;

/// A namespace with its conventional prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Turtle prefix, without the trailing colon.
    pub prefix: &'static str,
    /// Namespace IRI.
    pub iri: &'static str,
    /// Human-readable name.
    pub label: &'static str,
}

/// Returns every namespace the serializers abbreviate.
#[must_use]
pub fn all() -> &'static [Namespace] {
    const ALL: &[Namespace] = &[
        Namespace { prefix: "rdf", iri: rdf::NS, label: "RDF" },
        Namespace { prefix: "rdfs", iri: rdfs::NS, label: "RDF Schema" },
        Namespace { prefix: "owl", iri: owl::NS, label: "OWL" },
        Namespace { prefix: "xsd", iri: xsd::NS, label: "XML Schema datatypes" },
        Namespace { prefix: "crm", iri: crm::NS, label: "CIDOC CRM" },
        Namespace { prefix: "lrmoo", iri: lrmoo::NS, label: "LRMoo" },
        Namespace { prefix: "crmcls", iri: crmcls::NS, label: "CRMcls" },
        Namespace { prefix: "crmdig", iri: crmdig::NS, label: "CRMdig" },
        Namespace { prefix: "clscore", iri: clscor::NS, label: "CLSCor entities" },
        Namespace { prefix: "iso6391", iri: iso6391::NS, label: "ISO 639-1 languages" },
    ];
    ALL
}
