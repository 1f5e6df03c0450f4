//! XML Schema datatypes.

terms! {
    "http://www.w3.org/2001/XMLSchema#";
    STRING = "string",
    INTEGER = "integer",
    G_YEAR = "gYear",
    ANY_URI = "anyURI",
}
