//! ReM (Reference Corpus of Middle High German) generator.
//!
//! A ReM document is an edition of a text transmitted in a manuscript, so one
//! expression is embodied twice: in the publication the corpus text was taken
//! from and in the source manuscript, which exists as a physical item.

use clscor_ontology::fragment::{blank, fan_out, lit, Blank, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Literal};
use clscor_ontology::namespaces::{crm, crmcls, lrmoo, rdf, rdfs};

use super::{mandatory, tagged, Corpus};
use crate::bindings::rem::{self, RemFields, RemRecord};
use crate::error::{GenerateError, ValidationError};
use crate::vocab::{self, Vocabularies};

/// Genre used when a document has none.
pub const DEFAULT_GENRE: &str = "Undefined";

/// Wikidata item for "literary genre".
pub const WIKIDATA_GENRE: &str = "https://www.wikidata.org/entity/Q483394";

/// The ReM corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rem;

/// URIs shared by every ReM record.
#[derive(Debug, Clone)]
pub struct RemShared {
    /// ReM as a corpus.
    pub x1: Iri,
    /// The ReM prototypical document.
    pub x11: Iri,
    /// Type of work titles.
    pub e55_work_title: Iri,
    /// Type of ReM document ids.
    pub e55_document_id: Iri,
    /// Type of genre assignments.
    pub e55_genre_assignment: Iri,
    /// Broader term of all ReM genres.
    pub e55_genre: Iri,
    /// Type of ReM URLs.
    pub e55_url_id: Iri,
}

const E55_LABELS: [&str; 5] = [
    "ReM Work Title [Type]",
    "ReM Document ID [Type]",
    "ReM Genre Assignment [Type]",
    "Wikidata Genre [Type]",
    "ReM URL ID",
];

impl RemShared {
    /// Derives the shared URIs.
    pub fn new(minter: &Minter) -> Self {
        let [work_title, document_id, genre_assignment, genre, url_id] = E55_LABELS.map(|l| minter.hashed(l));
        Self {
            x1: minter.hashed("ReM [X1]"),
            x11: minter.hashed("ReM [X11]"),
            e55_work_title: work_title,
            e55_document_id: document_id,
            e55_genre_assignment: genre_assignment,
            e55_genre: genre,
            e55_url_id: url_id,
        }
    }
}

/// Entity URI Namespace of one ReM record.
#[derive(Debug, Clone)]
pub struct RemUris {
    /// Work.
    pub f1: Iri,
    /// Expression.
    pub f2: Iri,
    /// Corpus document.
    pub x2: Iri,
    /// ReM id of the corpus document.
    pub x2_id: Iri,
    /// ReM URL of the corpus document.
    pub x2_url: Iri,
    /// Publication manifestation.
    pub f3pub: Iri,
    /// Source manifestation.
    pub f3src: Iri,
    /// Manuscript.
    pub f5: Iri,
    /// Work creation.
    pub f27: Iri,
    /// Expression creation.
    pub f28: Iri,
    /// Creation of the corpus document.
    pub f30_x2: Iri,
    /// Creation of the publication.
    pub f30_f3pub: Iri,
    /// Creation of the source manifestation.
    pub f30_f3src: Iri,
    /// Production of the manuscript.
    pub f32: Iri,
    /// Time-span of the manuscript production.
    pub e52: Iri,
    /// Token-count attribute assignment.
    pub e13: Iri,
    /// Token-count feature.
    pub x3: Iri,
    /// Genre assignment.
    pub e17: Iri,
    /// Genre, keyed by genre label.
    pub genre: Iri,
    /// Title.
    pub e35: Iri,
    /// Run-level URIs.
    pub shared: RemShared,
}

impl Corpus for Rem {
    const NAME: &'static str = "rem";

    type Fields = RemFields;
    type Record = RemRecord;
    type Uris = RemUris;

    fn validate(fields: RemFields, _vocabs: &Vocabularies) -> Result<RemRecord, ValidationError> {
        rem::validate(fields)
    }

    fn label(fields: &RemFields) -> Option<String> {
        fields.id.clone()
    }

    fn preprocess(value: &mut serde_json::Value) {
        rem::sanitize_placeholders(value);
    }

    fn allocate(record: &RemRecord, minter: &Minter) -> RemUris {
        let genre = record.genre().unwrap_or(DEFAULT_GENRE);
        RemUris {
            f1: minter.random(),
            f2: minter.random(),
            x2: minter.random(),
            x2_id: minter.random(),
            x2_url: minter.random(),
            f3pub: minter.random(),
            f3src: minter.random(),
            f5: minter.random(),
            f27: minter.random(),
            f28: minter.random(),
            f30_x2: minter.random(),
            f30_f3pub: minter.random(),
            f30_f3src: minter.random(),
            f32: minter.random(),
            e52: minter.random(),
            e13: minter.random(),
            x3: minter.random(),
            e17: minter.random(),
            genre: minter.hashed(&tagged(genre, "ReM Genre")),
            e35: minter.random(),
            shared: RemShared::new(minter),
        }
    }

    fn fragments(
        record: &RemRecord,
        uris: &RemUris,
        vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError> {
        let title = record.title();
        let shared = &uris.shared;
        let source = record.source();
        let publication = record.publication();
        let tei = mandatory(vocabs, vocab::FORMAT, "TEI")?;
        let token_feature = vocabs.lookup_optional(vocab::FEATURE, "token");
        let genre = record.genre().unwrap_or(DEFAULT_GENRE);

        let mut fragments = vec![
            Fragment::new(&uris.f1)
                .with(rdf::TYPE, lrmoo::F1_WORK)
                .with(rdfs::LABEL, lit(tagged(title, "Work")))
                .with(lrmoo::R3_IS_REALISED_IN, &uris.f2)
                .with(lrmoo::R16I_WAS_CREATED_BY, &uris.f27),
            Fragment::new(&uris.f2)
                .with(rdf::TYPE, lrmoo::F2_EXPRESSION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression")))
                .with(lrmoo::R3I_REALISES, &uris.f1)
                .with(lrmoo::R4I_IS_EMBODIED_IN, fan_out([&uris.f3pub, &uris.f3src, &uris.x2]))
                .with(lrmoo::R17I_WAS_CREATED_BY, &uris.f28),
            Fragment::new(&uris.x2)
                .with(rdf::TYPE, crmcls::X2_CORPUS_DOCUMENT)
                .with(rdfs::LABEL, lit(tagged(title, "Corpus Document Manifestation")))
                .with(lrmoo::R4_EMBODIES, &uris.f2)
                .with(
                    crm::P1_IS_IDENTIFIED_BY,
                    Fragment::new(&uris.x2_id)
                        .with(rdf::TYPE, crm::E42_IDENTIFIER)
                        .with(rdfs::LABEL, lit(tagged(title, "ReM ID")))
                        .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(record.id()))
                        .with(crm::P2_HAS_TYPE, &shared.e55_document_id),
                )
                .with(
                    crm::P1_IS_IDENTIFIED_BY,
                    Fragment::new(&uris.x2_url)
                        .with(rdf::TYPE, crm::E42_IDENTIFIER)
                        .with(rdfs::LABEL, lit(tagged(title, "ReM URL ID")))
                        .with(crm::P190_HAS_SYMBOLIC_CONTENT, Literal::any_uri(record.resource_url()))
                        .with(crm::P2_HAS_TYPE, &shared.e55_url_id),
                )
                .with(
                    lrmoo::R71I_IS_PART_OF,
                    Fragment::new(&shared.x1)
                        .with(rdf::TYPE, crmcls::X1_CORPUS)
                        .with(lrmoo::R71_HAS_PART, &uris.x2)
                        .with(crm::P148_HAS_COMPONENT, &uris.x2),
                )
                .with(
                    crm::P137_EXEMPLIFIES,
                    Fragment::new(&shared.x11).with(rdf::TYPE, crmcls::X11_PROTOTYPICAL_DOCUMENT),
                )
                .with(crmcls::Y2_HAS_FORMAT, tei),
            Fragment::new(&uris.e13)
                .with(rdf::TYPE, crm::E13_ATTRIBUTE_ASSIGNMENT)
                .with(crm::P16_USED_SPECIFIC_OBJECT, &uris.x2)
                .with(crm::P140_ASSIGNED_ATTRIBUTE_TO, &uris.x2)
                .with(crm::P177_ASSIGNED_PROPERTY_OF_TYPE, crmcls::Y1_EXHIBITS_FEATURE)
                .with(
                    crm::P141_ASSIGNED,
                    Fragment::new(&uris.x3)
                        .with(rdf::TYPE, crmcls::X3_FEATURE)
                        .with_opt(crm::P2_HAS_TYPE, token_feature)
                        .with(
                            crm::P91I_IS_UNIT_OF,
                            blank()
                                .with(rdf::TYPE, crm::E54_DIMENSION)
                                .with(crm::P90_HAS_VALUE, Literal::integer(record.token_count())),
                        ),
                ),
            manifestation(&uris.f3pub, tagged(title, "Publication Manifestation"), publication.idno(), &uris.f2),
            manifestation(&uris.f3src, tagged(title, "Source Manifestation"), Some(source.idno()), &uris.f2),
        ];

        let item_ids: Vec<Blank> = [source.msname(), source.census_link()]
            .into_iter()
            .flatten()
            .map(|value| {
                blank()
                    .with(rdf::TYPE, crm::E42_IDENTIFIER)
                    .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(value))
            })
            .collect();
        fragments.push(
            Fragment::new(&uris.f5)
                .with(rdf::TYPE, lrmoo::F5_ITEM)
                .with(rdfs::LABEL, lit(tagged(title, "Physical Item")))
                .with(lrmoo::R7_EXEMPLIFIES, &uris.f3src)
                .with(
                    crm::P49_HAS_FORMER_OR_CURRENT_KEEPER,
                    blank()
                        .with(rdf::TYPE, lrmoo::F11_CORPORATE_BODY)
                        .with(rdfs::LABEL, lit(source.repo()))
                        .with(
                            crm::P1_IS_IDENTIFIED_BY,
                            blank()
                                .with(rdf::TYPE, crm::E41_APPELLATION)
                                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(source.repo())),
                        ),
                )
                .with(crm::P1_IS_IDENTIFIED_BY, fan_out(item_ids)),
        );

        fragments.push(
            Fragment::new(&uris.e17)
                .with(rdf::TYPE, crm::E17_TYPE_ASSIGNMENT)
                .with(crm::P2_HAS_TYPE, &shared.e55_genre_assignment)
                .with(
                    crm::P41_CLASSIFIED,
                    fan_out([&uris.f1, &uris.f2, &uris.x2, &uris.f3pub, &uris.f3src]),
                )
                .with(
                    crm::P42_ASSIGNED,
                    Fragment::new(&uris.genre)
                        .with(rdf::TYPE, crm::E55_TYPE)
                        .with(rdfs::LABEL, lit(tagged(genre, "ReM Genre")))
                        .with(crm::P127_HAS_BROADER_TERM, &shared.e55_genre),
                ),
        );

        fragments.push(
            Fragment::new(&uris.e35)
                .with(rdf::TYPE, crm::E35_TITLE)
                .with(rdfs::LABEL, lit(tagged(title, "Title")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(title))
                .with(crm::P102I_IS_TITLE_OF, fan_out([&uris.f1, &uris.f2, &uris.x2]))
                .with(crm::P2_HAS_TYPE, &shared.e55_work_title),
        );

        fragments.extend([
            Fragment::new(&uris.f27)
                .with(rdf::TYPE, lrmoo::F27_WORK_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Work Creation")))
                .with(lrmoo::R16_CREATED, &uris.f1),
            Fragment::new(&uris.f28)
                .with(rdf::TYPE, lrmoo::F28_EXPRESSION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression Creation")))
                .with(lrmoo::R19_CREATED_A_REALISATION_OF, &uris.f1)
                .with(lrmoo::R17_CREATED, &uris.f2),
            Fragment::new(&uris.f30_x2)
                .with(rdf::TYPE, lrmoo::F30_MANIFESTATION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Manifestation Creation")))
                .with(lrmoo::R24_CREATED, &uris.x2),
            Fragment::new(&uris.f30_f3src)
                .with(rdf::TYPE, lrmoo::F30_MANIFESTATION_CREATION)
                .with(rdfs::LABEL, lit(tagged(source.idno(), "Manifestation Creation")))
                .with(lrmoo::R24_CREATED, &uris.f3src),
        ]);

        if let Some(idno) = publication.idno() {
            let time_span = publication.date().map(|year| {
                blank()
                    .with(rdf::TYPE, crm::E52_TIME_SPAN)
                    .with(crm::P82_AT_SOME_TIME_WITHIN, Literal::g_year(year))
            });
            fragments.push(
                Fragment::new(&uris.f30_f3pub)
                    .with(rdf::TYPE, lrmoo::F30_MANIFESTATION_CREATION)
                    .with(rdfs::LABEL, lit(tagged(idno, "Manifestation Creation")))
                    .with(lrmoo::R24_CREATED, &uris.f3pub)
                    .with_opt(crm::P4_HAS_TIME_SPAN, time_span),
            );
        }

        let production_span = (source.tpq().is_some() || source.taq().is_some()).then(|| {
            Fragment::new(&uris.e52)
                .with(rdf::TYPE, crm::E52_TIME_SPAN)
                .with_opt(crm::P81A_END_OF_THE_BEGIN, source.tpq().map(Literal::g_year))
                .with_opt(crm::P81B_BEGIN_OF_THE_END, source.taq().map(Literal::g_year))
        });
        fragments.push(
            Fragment::new(&uris.f32)
                .with(rdf::TYPE, lrmoo::F32_ITEM_PRODUCTION_EVENT)
                .with(rdfs::LABEL, lit(tagged(source.idno(), "Item Production")))
                .with(lrmoo::R26_PRODUCED, &uris.f5)
                .with(lrmoo::R27_MATERIALIZED, &uris.f3src)
                .with_opt(crm::P4_HAS_TIME_SPAN, production_span),
        );

        Ok(fragments)
    }

    fn singletons(minter: &Minter) -> Vec<Fragment> {
        let shared = RemShared::new(minter);
        let mut fragments: Vec<Fragment> = E55_LABELS
            .iter()
            .map(|label| {
                Fragment::new(minter.hashed(label))
                    .with(rdf::TYPE, crm::E55_TYPE)
                    .with(rdfs::LABEL, lit(*label))
            })
            .collect();
        fragments.push(Fragment::new(&shared.e55_genre).with(crm::P1_IS_IDENTIFIED_BY, Iri::from(WIKIDATA_GENRE)));
        fragments
    }
}

fn manifestation(uri: &Iri, label: String, idno: Option<&str>, expression: &Iri) -> Fragment {
    let appellation = idno.map(|idno| {
        blank()
            .with(rdf::TYPE, crm::E41_APPELLATION)
            .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(idno))
    });
    Fragment::new(uri)
        .with(rdf::TYPE, lrmoo::F3_MANIFESTATION)
        .with(rdfs::LABEL, lit(label))
        .with(lrmoo::R4_EMBODIES, expression)
        .with_opt(crm::P1_IS_IDENTIFIED_BY, appellation)
}
