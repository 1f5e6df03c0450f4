//! DLK (Deutsches Lyrik-Korpus) generator.

use clscor_ontology::fragment::{blank, fan_out, lit, Blank, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Literal};
use clscor_ontology::namespaces::{crm, crmcls, iso6391, lrmoo, rdf, rdfs};

use super::{mandatory, tagged, Corpus};
use crate::bindings::dlk::{self, DlkFields, DlkRecord};
use crate::error::{GenerateError, ValidationError};
use crate::vocab::{self, Vocabularies};

/// The DLK corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dlk;

/// URIs shared by every DLK record.
#[derive(Debug, Clone)]
pub struct DlkShared {
    /// The DLK corpus.
    pub x1_dlk: Iri,
    /// The DLK prototypical document.
    pub x11_dlk: Iri,
    /// Type of DLK document ids.
    pub e55_id: Iri,
    /// Type of DLK document URLs.
    pub e55_id_url: Iri,
    /// Type of DLK URNs.
    pub e55_urn: Iri,
}

impl DlkShared {
    /// Derives the shared URIs.
    pub fn new(minter: &Minter) -> Self {
        Self {
            x1_dlk: minter.hashed("DLK [X1]"),
            x11_dlk: minter.hashed("DLK [X11]"),
            e55_id: minter.hashed("DLK ID [Type]"),
            e55_id_url: minter.hashed("DLK ID URL [Type]"),
            e55_urn: minter.hashed("DLK URN [Type]"),
        }
    }
}

/// Entity URI Namespace of one DLK record.
#[derive(Debug, Clone)]
pub struct DlkUris {
    /// Work.
    pub f1: Iri,
    /// Expression.
    pub f2: Iri,
    /// Manifestation.
    pub f3: Iri,
    /// Corpus document.
    pub x2: Iri,
    /// Work creation.
    pub f27: Iri,
    /// Expression creation.
    pub f28: Iri,
    /// Manifestation creation.
    pub f30: Iri,
    /// Title, keyed by title text.
    pub e35: Iri,
    /// One actor per author, keyed by full name.
    pub authors: Vec<Iri>,
    /// Run-level URIs.
    pub shared: DlkShared,
}

impl Corpus for Dlk {
    const NAME: &'static str = "dlk";

    type Fields = DlkFields;
    type Record = DlkRecord;
    type Uris = DlkUris;

    fn validate(fields: DlkFields, _vocabs: &Vocabularies) -> Result<DlkRecord, ValidationError> {
        dlk::validate(fields)
    }

    fn label(fields: &DlkFields) -> Option<String> {
        fields.dlk_id.clone()
    }

    fn allocate(record: &DlkRecord, minter: &Minter) -> DlkUris {
        DlkUris {
            f1: minter.random(),
            f2: minter.random(),
            f3: minter.random(),
            x2: minter.random(),
            f27: minter.random(),
            f28: minter.random(),
            f30: minter.random(),
            e35: minter.hashed(&tagged(record.title().as_str(), "Title")),
            authors: record.authors().iter().map(|a| minter.hashed(a.full_name())).collect(),
            shared: DlkShared::new(minter),
        }
    }

    fn fragments(
        record: &DlkRecord,
        uris: &DlkUris,
        vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError> {
        let title = record.title().as_str();
        let shared = &uris.shared;
        let marker = if record.title().is_artificial() {
            Some(mandatory(vocabs, vocab::APPELLATION, "artificial title")?)
        } else {
            None
        };

        let mut fragments = vec![
            Fragment::new(&uris.f1)
                .with(rdf::TYPE, lrmoo::F1_WORK)
                .with(rdfs::LABEL, lit(tagged(title, "Work Title")))
                .with(lrmoo::R3_IS_REALISED_IN, &uris.f2)
                .with(lrmoo::R16I_WAS_CREATED_BY, &uris.f27),
            Fragment::new(&uris.f2)
                .with(rdf::TYPE, lrmoo::F2_EXPRESSION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression Title")))
                .with(lrmoo::R3I_REALISES, &uris.f1)
                .with(lrmoo::R4I_IS_EMBODIED_IN, fan_out([&uris.f3, &uris.x2]))
                .with(lrmoo::R17I_WAS_CREATED_BY, &uris.f28),
            Fragment::new(&uris.f3)
                .with(rdf::TYPE, lrmoo::F3_MANIFESTATION)
                .with(rdfs::LABEL, lit(tagged(title, "Manifestation")))
                .with(lrmoo::R4_EMBODIES, &uris.f2)
                .with(lrmoo::R24I_WAS_CREATED_THROUGH, &uris.f30),
            Fragment::new(&uris.e35)
                .with(rdf::TYPE, crm::E35_TITLE)
                .with(rdfs::LABEL, lit(tagged(title, "Title")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(title))
                .with(crm::P102I_IS_TITLE_OF, fan_out([&uris.f1, &uris.f2, &uris.f3, &uris.x2]))
                .with_opt(crm::P2_HAS_TYPE, marker),
        ];

        let mut identifiers = vec![
            id_node(tagged(record.dlk_id(), "DLK ID"), record.dlk_id(), &shared.e55_id),
            id_node(tagged(record.resource_uri(), "DLK ID URL"), record.resource_uri(), &shared.e55_id_url),
        ];
        if let Some(urn) = record.urn() {
            identifiers.push(id_node(tagged(urn, "DLK URN"), urn, &shared.e55_urn));
        }
        fragments.push(
            Fragment::new(&uris.x2)
                .with(rdf::TYPE, crmcls::X2_CORPUS_DOCUMENT)
                .with(rdfs::LABEL, lit(tagged(title, "Corpus Document Title")))
                .with(lrmoo::R4_EMBODIES, &uris.f2)
                .with(lrmoo::R71I_IS_PART_OF, &shared.x1_dlk)
                .with(crm::P148I_IS_COMPONENT_OF, &shared.x1_dlk)
                .with(crm::P137_EXEMPLIFIES, &shared.x11_dlk)
                .with(crm::P72_HAS_LANGUAGE, iso6391::DE)
                .with(crm::P1_IS_IDENTIFIED_BY, fan_out(identifiers)),
        );

        let time_span = record.publication_date().map(|year| {
            blank()
                .with(rdf::TYPE, crm::E52_TIME_SPAN)
                .with(crm::P82_AT_SOME_TIME_WITHIN, Literal::g_year(year))
        });
        fragments.extend([
            Fragment::new(&uris.f27)
                .with(rdf::TYPE, lrmoo::F27_WORK_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Work Creation")))
                .with(lrmoo::R16_CREATED, &uris.f1)
                .with(crm::P14_CARRIED_OUT_BY, fan_out(&uris.authors)),
            Fragment::new(&uris.f28)
                .with(rdf::TYPE, lrmoo::F28_EXPRESSION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression Creation")))
                .with(lrmoo::R17_CREATED, &uris.f2)
                .with(crm::P14_CARRIED_OUT_BY, fan_out(&uris.authors)),
            Fragment::new(&uris.f30)
                .with(rdf::TYPE, lrmoo::F30_MANIFESTATION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Manifestation Creation")))
                .with(lrmoo::R24_CREATED, &uris.f3)
                .with(crm::P14_CARRIED_OUT_BY, fan_out(&uris.authors))
                .with_opt(crm::P4_HAS_TIME_SPAN, time_span),
        ]);

        for (author, uri) in record.authors().iter().zip(&uris.authors) {
            fragments.push(
                Fragment::new(uri)
                    .with(rdf::TYPE, crm::E39_ACTOR)
                    .with(rdfs::LABEL, lit(tagged(author.full_name(), "Actor")))
                    .with(
                        crm::P1_IS_IDENTIFIED_BY,
                        blank()
                            .with(rdf::TYPE, crm::E41_APPELLATION)
                            .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(author.full_name())),
                    )
                    .with(crm::P14I_PERFORMED, fan_out([&uris.f27, &uris.f28, &uris.f30])),
            );
        }

        Ok(fragments)
    }

    fn singletons(minter: &Minter) -> Vec<Fragment> {
        let shared = DlkShared::new(minter);
        vec![
            e55(&shared.e55_id, "DLK Document ID"),
            e55(&shared.e55_id_url, "DLK Document ID URL"),
            e55(&shared.e55_urn, "DLK Document URN"),
            Fragment::new(&shared.x1_dlk)
                .with(rdf::TYPE, crmcls::X1_CORPUS)
                .with(rdfs::LABEL, lit("DLK [Corpus]")),
            Fragment::new(&shared.x11_dlk)
                .with(rdf::TYPE, crmcls::X11_PROTOTYPICAL_DOCUMENT)
                .with(rdfs::LABEL, lit("DLK [Prototypical Document]")),
        ]
    }
}

fn id_node(label: String, value: &str, id_type: &Iri) -> Blank {
    blank()
        .with(rdf::TYPE, crm::E42_IDENTIFIER)
        .with(rdfs::LABEL, lit(label))
        .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(value))
        .with(crm::P2_HAS_TYPE, id_type)
}

fn e55(uri: &Iri, label: &str) -> Fragment {
    Fragment::new(uri)
        .with(rdf::TYPE, crm::E55_TYPE)
        .with(rdfs::LABEL, lit(label))
}
