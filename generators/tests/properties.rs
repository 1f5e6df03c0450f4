//! Property-based tests for validation and generation.

use proptest::prelude::*;

use clscor_generators::bindings::dlk::{AuthorFields, DlkFields};
use clscor_generators::bindings::eltec::EltecFields;
use clscor_generators::corpora::{Dlk, Eltec};
use clscor_generators::{convert_batch, convert_record, Context, RecordError, Vocabularies};
use clscor_ontology::model::Term;
use clscor_ontology::namespaces::{crm, rdf};
use clscor_ontology::{Graph, Minter};

fn context() -> Context {
    Context::new(Vocabularies::builtin().unwrap(), Minter::default())
}

fn eltec(stem: &str, author: &str) -> EltecFields {
    EltecFields {
        resource_uri: Some(format!(
            "https://raw.githubusercontent.com/COST-ELTeC/ELTeC-deu/master/level1/{stem}.xml"
        )),
        work_title: Some(format!("Roman {stem}")),
        author_name: Some(author.to_owned()),
        ..EltecFields::default()
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    /// A full name other than "forename surname" is always rejected.
    #[test]
    fn prop_full_name_mismatch_rejected(
        forename in "[A-Z][a-z]{1,10}",
        surname in "[A-Z][a-z]{1,10}",
        full_name in "[A-Za-z ]{1,24}",
    ) {
        prop_assume!(full_name != format!("{forename} {surname}"));
        let fields = DlkFields {
            resource_uri: Some("https://dlk.example.org/1".into()),
            dlk_id: Some("1".into()),
            title: Some("Abendlied".into()),
            authors: Some(vec![AuthorFields {
                forename: Some(forename),
                surname: Some(surname),
                full_name: Some(full_name),
            }]),
            ..DlkFields::default()
        };
        let result = convert_record::<Dlk>(fields, &context());
        prop_assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    /// Publication dates must have at least four digits and nothing else.
    #[test]
    fn prop_bad_publication_date_rejected(date in "[0-9]{1,3}|[0-9]{2}[a-z]{2}|[0-9]{4}-[0-9]{2}") {
        let fields = DlkFields {
            resource_uri: Some("https://dlk.example.org/1".into()),
            dlk_id: Some("1".into()),
            title: Some("Abendlied".into()),
            publication_date: Some(date),
            ..DlkFields::default()
        };
        prop_assert!(convert_record::<Dlk>(fields, &context()).is_err());
    }
}

// =============================================================================
// Generation
// =============================================================================

proptest! {
    /// Records by the same author share one actor entity.
    #[test]
    fn prop_same_author_one_actor(
        author in "[A-Z][a-z]{2,8}, [A-Z][a-z]{2,8}",
        stems in prop::collection::btree_set("[a-z]{3}[0-9]{4}", 1..5),
    ) {
        let records: Vec<_> = stems.iter().map(|stem| Ok(eltec(stem, &author))).collect();
        let mut graph = Graph::new();
        let report = convert_batch::<Eltec, _>(records, &context(), &mut graph);
        prop_assert_eq!(report.converted, stems.len());
        prop_assert_eq!(graph.subjects(&rdf::TYPE, &Term::from(crm::E39_ACTOR)).count(), 1);
    }

    /// No literal the generators emit is empty.
    #[test]
    fn prop_no_empty_literals(stem in "[a-z]{3}[0-9]{4}", author in "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}") {
        let graph = convert_record::<Eltec>(eltec(&stem, &author), &context()).unwrap();
        for triple in graph.iter() {
            if let Some(literal) = triple.object.as_literal() {
                prop_assert!(!literal.lexical().is_empty());
            }
        }
    }
}
