//! CRMcls: the CLSCor corpus extension of CIDOC CRM.

terms! {
    "https://clscor.io/ontologies/CRMcls/";
    // Classes
    X1_CORPUS = "X1_Corpus",
    X2_CORPUS_DOCUMENT = "X2_Corpus_Document",
    X3_FEATURE = "X3_Feature",
    X8_SCHEMA = "X8_Schema",
    X11_PROTOTYPICAL_DOCUMENT = "X11_Prototypical_Document",
    // Properties
    Y1_EXHIBITS_FEATURE = "Y1_exhibits_feature",
    Y2_HAS_FORMAT = "Y2_has_format",
    Y3_ADHERES_TO_SCHEMA = "Y3_adheres_to_schema",
    Y3I_IS_SCHEMA_OF = "Y3i_is_schema_of",
    Y4_HAS_SUBCORPUS = "Y4_has_subcorpus",
    Y4I_IS_SUBCORPUS_OF = "Y4i_is_subcorpus_of",
}
