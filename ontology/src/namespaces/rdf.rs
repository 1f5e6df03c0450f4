//! RDF vocabulary.

terms! {
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    TYPE = "type",
    VALUE = "value",
    LANG_STRING = "langString",
}
