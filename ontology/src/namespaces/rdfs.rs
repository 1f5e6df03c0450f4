//! RDF Schema vocabulary.

terms! {
    "http://www.w3.org/2000/01/rdf-schema#";
    LABEL = "label",
    SEE_ALSO = "seeAlso",
    COMMENT = "comment",
}
