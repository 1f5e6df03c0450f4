//! OWL vocabulary.

terms! {
    "http://www.w3.org/2002/07/owl#";
    SAME_AS = "sameAs",
}
