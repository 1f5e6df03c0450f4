//! Batch conversion: validate, generate and accumulate record by record.
//!
//! Each record's triples are collected into a record-local [`Graph`] and only
//! merged into the accumulator when the whole record succeeded, so a failing
//! record never leaves partial output behind.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clscor_ontology::fragment::expand_all;
use clscor_ontology::mint::Minter;
use clscor_ontology::Graph;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ConvertConfig;
use crate::corpora::{generate, Corpus, Dlk, Eltec, Gutenberg, Rem, ToolInventory};
use crate::error::{InputError, RecordError, VocabError};
use crate::input::read_records;
use crate::vocab::Vocabularies;

/// When the run-level singleton entities are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingletonPolicy {
    /// Once per run, before the first converted record.
    #[default]
    PerRun,
    /// With every record.
    PerRecord,
}

impl SingletonPolicy {
    /// Command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SingletonPolicy::PerRun => "per-run",
            SingletonPolicy::PerRecord => "per-record",
        }
    }
}

impl fmt::Display for SingletonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown singleton policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown singleton policy `{0}` (expected per-run or per-record)")]
pub struct UnknownPolicy(pub String);

impl FromStr for SingletonPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-run" => Ok(SingletonPolicy::PerRun),
            "per-record" => Ok(SingletonPolicy::PerRecord),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

/// Everything a conversion needs besides the records.
#[derive(Debug, Clone)]
pub struct Context {
    vocabs: Vocabularies,
    minter: Minter,
    singletons: SingletonPolicy,
    infer_id_types: bool,
}

impl Context {
    /// A context with the default policies.
    pub fn new(vocabs: Vocabularies, minter: Minter) -> Self {
        Self {
            vocabs,
            minter,
            singletons: SingletonPolicy::default(),
            infer_id_types: false,
        }
    }

    /// Builds the context a configuration describes: built-in vocabularies,
    /// overlaid by `vocab_dir` when set.
    ///
    /// # Errors
    ///
    /// The first vocabulary that fails to load.
    pub fn from_config(config: &ConvertConfig) -> Result<Self, VocabError> {
        let mut vocabs = Vocabularies::builtin()?;
        if let Some(dir) = &config.vocab_dir {
            let loaded = vocabs.load_dir(dir)?;
            info!(dir = %dir.display(), loaded, "loaded vocabulary overlay");
        }
        Ok(Self::new(vocabs, config.minter())
            .with_singletons(config.singletons)
            .with_infer_id_types(config.infer_id_types))
    }

    /// Sets the singleton policy.
    #[must_use]
    pub fn with_singletons(mut self, singletons: SingletonPolicy) -> Self {
        self.singletons = singletons;
        self
    }

    /// Enables the identifier-type containment heuristic.
    #[must_use]
    pub fn with_infer_id_types(mut self, infer: bool) -> Self {
        self.infer_id_types = infer;
        self
    }

    /// Loaded vocabularies.
    pub fn vocabs(&self) -> &Vocabularies {
        &self.vocabs
    }

    /// URI minter.
    pub fn minter(&self) -> &Minter {
        &self.minter
    }

    /// Singleton policy.
    pub fn singletons(&self) -> SingletonPolicy {
        self.singletons
    }
}

/// Converts one raw record into its own graph.
///
/// # Errors
///
/// [`RecordError::Validation`] or [`RecordError::Generate`].
pub fn convert_record<C: Corpus>(mut fields: C::Fields, ctx: &Context) -> Result<Graph, RecordError> {
    if ctx.infer_id_types {
        C::infer_id_types(&mut fields, &ctx.vocabs);
    }
    let record = C::validate(fields, &ctx.vocabs)?;
    let mut graph: Graph = generate::<C>(&record, &ctx.minter, &ctx.vocabs)?.collect();
    if ctx.singletons == SingletonPolicy::PerRecord {
        graph.extend(expand_all(C::singletons(&ctx.minter)));
    }
    Ok(graph)
}

/// One record that was not converted.
#[derive(Debug)]
pub struct RecordFailure {
    /// Position in the input.
    pub index: usize,
    /// Record identifier, or `#index` when it has none.
    pub label: String,
    /// Why it failed.
    pub error: RecordError,
}

impl fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {} ({}): {}", self.index, self.label, self.error)
    }
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records merged into the graph.
    pub converted: usize,
    /// Records that were skipped.
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    /// Number of records seen.
    pub fn total(&self) -> usize {
        self.converted + self.failures.len()
    }

    /// `true` when every record converted.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts `records` into `graph`, recording failures instead of stopping.
///
/// Input items that already failed (malformed JSON rows and the like) are
/// reported as failures of their record.
pub fn convert_batch<C, I>(records: I, ctx: &Context, graph: &mut Graph) -> BatchReport
where
    C: Corpus,
    I: IntoIterator<Item = Result<C::Fields, RecordError>>,
{
    let mut report = BatchReport::default();
    let mut singletons_pending = ctx.singletons == SingletonPolicy::PerRun;

    for (index, raw) in records.into_iter().enumerate() {
        let label = raw
            .as_ref()
            .ok()
            .and_then(C::label)
            .unwrap_or_else(|| format!("#{index}"));
        match raw.and_then(|fields| convert_record::<C>(fields, ctx)) {
            Ok(record_graph) => {
                if singletons_pending {
                    graph.extend(expand_all(C::singletons(&ctx.minter)));
                    singletons_pending = false;
                }
                debug!(corpus = C::NAME, index, record = %label, triples = record_graph.len(), "converted record");
                graph.merge(record_graph);
                report.converted += 1;
            }
            Err(error) => {
                warn!(corpus = C::NAME, index, record = %label, %error, "skipping record");
                report.failures.push(RecordFailure { index, label, error });
            }
        }
    }

    info!(
        corpus = C::NAME,
        converted = report.converted,
        failed = report.failures.len(),
        triples = graph.len(),
        "batch finished"
    );
    report
}

/// The corpora, selectable by name at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    /// ELTeC
    Eltec,
    /// Deutsches Lyrik Korpus
    Dlk,
    /// Project Gutenberg
    Gutenberg,
    /// Reference Corpus of Middle High German
    Rem,
    /// Tool inventory
    ToolInventory,
}

impl CorpusKind {
    /// Every corpus.
    pub const ALL: [CorpusKind; 5] = [
        CorpusKind::Eltec,
        CorpusKind::Dlk,
        CorpusKind::Gutenberg,
        CorpusKind::Rem,
        CorpusKind::ToolInventory,
    ];

    /// Name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            CorpusKind::Eltec => Eltec::NAME,
            CorpusKind::Dlk => Dlk::NAME,
            CorpusKind::Gutenberg => Gutenberg::NAME,
            CorpusKind::Rem => Rem::NAME,
            CorpusKind::ToolInventory => ToolInventory::NAME,
        }
    }

    /// Reads `input` and converts every record of it into `graph`.
    ///
    /// # Errors
    ///
    /// [`InputError`] when the file as a whole cannot be read. Failing records
    /// are reported in the returned [`BatchReport`].
    pub fn convert_file(self, input: &Path, ctx: &Context, graph: &mut Graph) -> Result<BatchReport, InputError> {
        fn run<C: Corpus>(input: &Path, ctx: &Context, graph: &mut Graph) -> Result<BatchReport, InputError> {
            let records = read_records::<C>(input)?;
            Ok(convert_batch::<C, _>(records, ctx, graph))
        }
        match self {
            CorpusKind::Eltec => run::<Eltec>(input, ctx, graph),
            CorpusKind::Dlk => run::<Dlk>(input, ctx, graph),
            CorpusKind::Gutenberg => run::<Gutenberg>(input, ctx, graph),
            CorpusKind::Rem => run::<Rem>(input, ctx, graph),
            CorpusKind::ToolInventory => run::<ToolInventory>(input, ctx, graph),
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown corpus name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown corpus `{0}` (expected one of eltec, dlk, gutenberg, rem, tool-inventory)")]
pub struct UnknownCorpus(pub String);

impl FromStr for CorpusKind {
    type Err = UnknownCorpus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorpusKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownCorpus(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use clscor_ontology::namespaces::{crm, rdf};
    use clscor_ontology::model::Term;

    use super::*;
    use crate::bindings::dlk::{AuthorFields, DlkFields};
    use crate::corpora::Dlk;

    fn context() -> Context {
        Context::new(Vocabularies::builtin().unwrap(), Minter::default())
    }

    fn dlk(id: &str, full_name: &str) -> DlkFields {
        DlkFields {
            resource_uri: Some(format!("https://dlk.example.org/{id}")),
            dlk_id: Some(id.into()),
            title: Some(format!("Gedicht {id}")),
            authors: Some(vec![AuthorFields {
                forename: Some("Annette".into()),
                surname: Some("von Droste-Hülshoff".into()),
                full_name: Some(full_name.into()),
            }]),
            ..DlkFields::default()
        }
    }

    fn e55_count(graph: &Graph) -> usize {
        graph.subjects(&rdf::TYPE, &Term::from(crm::E55_TYPE)).count()
    }

    #[test]
    fn policy_round_trips_through_strings() {
        for policy in [SingletonPolicy::PerRun, SingletonPolicy::PerRecord] {
            assert_eq!(policy.to_string().parse::<SingletonPolicy>().unwrap(), policy);
        }
        assert!("sometimes".parse::<SingletonPolicy>().is_err());
    }

    #[test]
    fn corpus_names_parse() {
        for kind in CorpusKind::ALL {
            assert_eq!(kind.name().parse::<CorpusKind>().unwrap(), kind);
        }
        assert_eq!("tool-inventory".parse(), Ok(CorpusKind::ToolInventory));
        assert!("ELTeC".parse::<CorpusKind>().is_err());
    }

    #[test]
    fn bad_record_does_not_stop_the_batch() {
        let good = "Annette von Droste-Hülshoff";
        let records = vec![
            Ok(dlk("1", good)),
            Ok(dlk("2", "Droste")),
            Err(RecordError::Malformed("expected a string".into())),
            Ok(dlk("4", good)),
        ];
        let mut graph = Graph::new();
        let report = convert_batch::<Dlk, _>(records, &context(), &mut graph);

        assert_eq!(report.converted, 2);
        assert_eq!(report.total(), 4);
        let failed: Vec<_> = report.failures.iter().map(|f| (f.index, f.label.as_str())).collect();
        assert_eq!(failed, vec![(1, "2"), (2, "#2")]);
        assert!(matches!(report.failures[0].error, RecordError::Validation(_)));
        // The failing record contributed nothing.
        assert!(!graph.iter().any(|t| t.object.as_literal().is_some_and(|l| l.lexical() == "Gedicht 2")));
    }

    #[test]
    fn per_run_singletons_are_emitted_once() {
        let mut graph = Graph::new();
        let records = vec![Ok(dlk("1", "Annette von Droste-Hülshoff")), Ok(dlk("2", "Annette von Droste-Hülshoff"))];
        convert_batch::<Dlk, _>(records, &context(), &mut graph);
        assert_eq!(e55_count(&graph), 3);
    }

    #[test]
    fn no_singletons_without_a_converted_record() {
        let mut graph = Graph::new();
        let report = convert_batch::<Dlk, _>(vec![Ok(dlk("1", "x"))], &context(), &mut graph);
        assert!(!report.is_clean());
        assert!(graph.is_empty());
    }

    #[test]
    fn per_record_singletons_travel_with_each_record() {
        let ctx = context().with_singletons(SingletonPolicy::PerRecord);
        let graph = convert_record::<Dlk>(dlk("1", "Annette von Droste-Hülshoff"), &ctx).unwrap();
        assert_eq!(e55_count(&graph), 3);
    }

    #[test]
    fn id_types_are_inferred_only_when_enabled() {
        use crate::bindings::eltec::EltecFields;
        use crate::bindings::IdFields;
        use crate::corpora::Eltec;

        let fields = EltecFields {
            resource_uri: Some("https://raw.githubusercontent.com/COST-ELTeC/ELTeC-deu/master/level1/DEU001.xml".into()),
            work_title: Some("Effi Briest".into()),
            author_name: Some("Fontane, Theodor".into()),
            author_ids: Some(vec![IdFields {
                id_value: Some("https://viaf.org/viaf/27068555".into()),
                id_type: None,
            }]),
            ..EltecFields::default()
        };
        let ctx = context();
        let viaf = Term::from(ctx.vocabs().lookup("identifier", "viaf").unwrap());
        let typed = |graph: &Graph| graph.subjects(&crm::P2_HAS_TYPE, &viaf).count();

        let graph = convert_record::<Eltec>(fields.clone(), &ctx).unwrap();
        assert_eq!(typed(&graph), 0);

        let graph = convert_record::<Eltec>(fields, &ctx.with_infer_id_types(true)).unwrap();
        assert_eq!(typed(&graph), 1);
    }
}
