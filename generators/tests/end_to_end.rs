//! File in, graph out: the conversion path the command-line client takes.

use std::fs;
use std::path::{Path, PathBuf};

use clscor_generators::{ConvertConfig, Context, CorpusKind, RecordError, SingletonPolicy, Vocabularies};
use clscor_ontology::model::{Subject, Term};
use clscor_ontology::namespaces::{crm, crmcls, lrmoo, rdf};
use clscor_ontology::{reader, Graph, Minter, RdfFormat};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn instances(graph: &Graph, class: &clscor_ontology::Iri) -> Vec<Subject> {
    graph.subjects(&rdf::TYPE, &Term::from(class)).cloned().collect()
}

fn context() -> Context {
    Context::new(Vocabularies::builtin().unwrap(), Minter::default())
}

const ELTEC: &str = r#"[
  {
    "resource_uri": "https://raw.githubusercontent.com/COST-ELTeC/ELTeC-eng/master/level1/ENG18400_Trollope.xml",
    "work_title": "The Kellys and the O'Kellys",
    "author_name": "Trollope, Anthony",
    "work_ids": null,
    "author_ids": null
  }
]"#;

#[test]
fn minimal_eltec_record_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "eltec.json", ELTEC);

    let mut graph = Graph::new();
    let report = CorpusKind::Eltec.convert_file(&input, &context(), &mut graph).unwrap();
    assert_eq!(report.converted, 1);
    assert!(report.is_clean());

    let works = instances(&graph, &lrmoo::F1_WORK);
    let expressions = instances(&graph, &lrmoo::F2_EXPRESSION);
    let documents = instances(&graph, &crmcls::X2_CORPUS_DOCUMENT);
    assert_eq!((works.len(), expressions.len(), documents.len()), (1, 1, 1));

    let realised: Vec<_> = graph.objects(&works[0], &lrmoo::R3_IS_REALISED_IN).cloned().collect();
    assert_eq!(realised, vec![Term::from(expressions[0].clone())]);
    let embodies: Vec<_> = graph.objects(&documents[0], &lrmoo::R4_EMBODIES).cloned().collect();
    assert_eq!(embodies, vec![Term::from(expressions[0].clone())]);

    // No work or author identifiers were given.
    assert!(instances(&graph, &lrmoo::F3_MANIFESTATION).is_empty());
}

#[test]
fn turtle_output_reparses_to_the_same_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(dir.path(), "eltec.json", ELTEC);
    let mut graph = Graph::new();
    CorpusKind::Eltec.convert_file(&input, &context(), &mut graph).unwrap();

    for format in [RdfFormat::Turtle, RdfFormat::NTriples] {
        let text = format.serialize(&graph);
        let reparsed = reader::read(format, &text).unwrap();
        assert_eq!(reparsed.len(), graph.len(), "{format:?}");
    }
}

#[test]
fn dlk_artificial_title_is_marked() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "dlk.json",
        r#"[
          {"resource_uri": "https://dlk.example.org/dlk-0001", "dlk_id": "dlk-0001",
           "title": "Mondnacht"},
          {"resource_uri": "https://dlk.example.org/dlk-0002", "dlk_id": "dlk-0002",
           "artificial_title": "Es war, als hätt' der Himmel"}
        ]"#,
    );
    let mut graph = Graph::new();
    let report = CorpusKind::Dlk.convert_file(&input, &context(), &mut graph).unwrap();
    assert_eq!(report.converted, 2);

    let marked: Vec<_> = instances(&graph, &crm::E35_TITLE)
        .into_iter()
        .filter(|title| graph.objects(title, &crm::P2_HAS_TYPE).next().is_some())
        .collect();
    assert_eq!(marked.len(), 1);
}

#[test]
fn one_bad_record_the_rest_converted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "dlk.json",
        r#"[
          {"resource_uri": "https://dlk.example.org/1", "dlk_id": "1", "title": "A"},
          {"resource_uri": "https://dlk.example.org/2", "dlk_id": "2", "title": "B",
           "authors": [{"forename": "Eduard", "surname": "Mörike", "full_name": "Mörike, Eduard"}]},
          {"resource_uri": "https://dlk.example.org/3", "dlk_id": 3, "title": "C"},
          {"resource_uri": "https://dlk.example.org/4", "dlk_id": "4", "title": "D"}
        ]"#,
    );
    let mut graph = Graph::new();
    let report = CorpusKind::Dlk.convert_file(&input, &context(), &mut graph).unwrap();

    assert_eq!(report.converted, 2);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].label, "2");
    assert_eq!(report.failures[0].error.to_string().split(':').next(), Some("authors[0].full_name"));
    assert!(matches!(report.failures[1].error, RecordError::Malformed(_)));
    assert_eq!(instances(&graph, &lrmoo::F1_WORK).len(), 2);
}

#[test]
fn unwritable_gutenberg_url_fails_only_its_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "gutenberg.json",
        r#"{"results": [
          {"id": 84, "title": "Frankenstein", "authors": [{"name": "Shelley, Mary Wollstonecraft"}],
           "languages": ["en"], "formats": {"application/rdf+xml": "https://www.gutenberg.org/ebooks/84 copy>.rdf"}},
          {"id": 1342, "title": "Pride and Prejudice", "authors": [{"name": "Austen, Jane"}],
           "languages": ["en"], "formats": {"application/rdf+xml": "https://www.gutenberg.org/ebooks/1342.rdf"}}
        ]}"#,
    );
    let mut graph = Graph::new();
    let report = CorpusKind::Gutenberg.convert_file(&input, &context(), &mut graph).unwrap();
    assert_eq!(report.converted, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].label, "84");
    assert!(matches!(report.failures[0].error, RecordError::Validation(_)));

    for format in [RdfFormat::Turtle, RdfFormat::NTriples] {
        let reparsed = reader::read(format, &format.serialize(&graph)).unwrap();
        assert_eq!(reparsed.len(), graph.len(), "{format:?}");
    }
}

#[test]
fn tool_inventory_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        dir.path(),
        "tools.csv",
        "name,url,description,license,deliverable,notes,developers,methods,formats\n\
         stylo,https://github.com/computationalstylistics/stylo,Stylometry in R,GPL-3.0,,,\"Maciej Eder, Jan Rybicki\",stylometry,plain text\n\
         ,https://example.org/nameless,,,,,,,\n",
    );
    let mut graph = Graph::new();
    let report = CorpusKind::ToolInventory.convert_file(&input, &context(), &mut graph).unwrap();
    assert_eq!(report.converted, 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(instances(&graph, &crm::E39_ACTOR).len(), 2);
    assert_eq!(instances(&graph, &crm::E33_LINGUISTIC_OBJECT).len(), 2);
}

#[test]
fn configured_context() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConvertConfig::from_toml(
        r#"
        entity_base = "https://example.org/entity/"
        singletons = "per-record"
        "#,
    )
    .unwrap();
    let ctx = Context::from_config(&config).unwrap();
    assert_eq!(ctx.singletons(), SingletonPolicy::PerRecord);

    let input = write(dir.path(), "eltec.json", ELTEC);
    let mut graph = Graph::new();
    CorpusKind::Eltec.convert_file(&input, &ctx, &mut graph).unwrap();
    let works = instances(&graph, &lrmoo::F1_WORK);
    assert!(matches!(&works[0], Subject::Iri(iri) if iri.as_str().starts_with("https://example.org/entity/")));
    assert_eq!(instances(&graph, &crm::E55_TYPE).len(), 3);
}
