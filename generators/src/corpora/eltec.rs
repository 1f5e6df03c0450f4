//! ELTeC (European Literary Text Collection) generator.
//!
//! One TEI document yields the WEMI chain, the document's place in its
//! language sub-corpus and in ELTeC as a whole, its schema conformance, one
//! manifestation per work identifier and the author with their identifiers.

use clscor_ontology::fragment::{blank, fan_out, lit, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Literal};
use clscor_ontology::namespaces::{crm, crmcls, lrmoo, owl, rdf, rdfs};

use super::{mandatory, tagged, Corpus};
use crate::bindings::eltec::{self, EltecFields, EltecRecord};
use crate::bindings::Identifier;
use crate::error::{GenerateError, ValidationError};
use crate::vocab::{self, Vocabularies};

/// ELTeC Level 1 RelaxNG schema.
pub const SCHEMA_LEVEL1: &str = "https://raw.githubusercontent.com/COST-ELTeC/Schemas/master/eltec-1.rng";

/// The ELTeC corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eltec;

/// URIs shared by every ELTeC record.
#[derive(Debug, Clone)]
pub struct EltecShared {
    /// ELTeC as a whole.
    pub x1_eltec: Iri,
    /// The ELTeC prototypical document.
    pub x11_eltec: Iri,
    /// ELTeC Level 1 schema.
    pub x8: Iri,
    /// Identifier of the schema file.
    pub schema: Iri,
    /// Type of work titles.
    pub e55_title: Iri,
    /// Type of ELTeC document ids.
    pub e55_id: Iri,
    /// Type of author name appellations.
    pub e55_author_name: Iri,
}

impl EltecShared {
    /// Derives the shared URIs.
    pub fn new(minter: &Minter) -> Self {
        Self {
            x1_eltec: minter.hashed("ELTeC [X1]"),
            x11_eltec: minter.hashed("ELTeC [X11]"),
            x8: minter.hashed("ELTeC Level 1 Schema"),
            schema: minter.hashed(SCHEMA_LEVEL1),
            e55_title: minter.hashed("ELTeC Title"),
            e55_id: minter.hashed("ELTeC ID"),
            e55_author_name: minter.hashed("ELTeC Author Name"),
        }
    }
}

/// A language sub-corpus.
#[derive(Debug, Clone)]
pub struct RepoUris {
    /// The sub-corpus.
    pub x1: Iri,
    /// Its appellation.
    pub appellation: Iri,
    /// Appellation text, e.g. `ELTeC ENG`.
    pub name: String,
}

/// Entity URI Namespace of one ELTeC record.
#[derive(Debug, Clone)]
pub struct EltecUris {
    /// Work.
    pub f1: Iri,
    /// Expression.
    pub f2: Iri,
    /// TEI document.
    pub x2: Iri,
    /// ELTeC id of the TEI document.
    pub x2_e42: Iri,
    /// Title.
    pub e35: Iri,
    /// Work creation.
    pub f27: Iri,
    /// Expression creation.
    pub f28: Iri,
    /// Author, keyed by name.
    pub e39: Iri,
    /// Author name appellation.
    pub e39_e41: Iri,
    /// Sub-corpus, when the repository is known.
    pub repo: Option<RepoUris>,
    /// `(manifestation, identifier)` per work identifier.
    pub work_ids: Vec<(Iri, Iri)>,
    /// `(actor, identifier)` per author identifier.
    pub author_ids: Vec<(Iri, Iri)>,
    /// Run-level URIs.
    pub shared: EltecShared,
}

impl Corpus for Eltec {
    const NAME: &'static str = "eltec";

    type Fields = EltecFields;
    type Record = EltecRecord;
    type Uris = EltecUris;

    fn validate(fields: EltecFields, vocabs: &Vocabularies) -> Result<EltecRecord, ValidationError> {
        eltec::validate(fields, vocabs)
    }

    fn label(fields: &EltecFields) -> Option<String> {
        fields.file_stem.clone().or_else(|| fields.resource_uri.clone())
    }

    fn infer_id_types(fields: &mut EltecFields, vocabs: &Vocabularies) {
        eltec::infer_id_types(fields, vocabs);
    }

    fn allocate(record: &EltecRecord, minter: &Minter) -> EltecUris {
        let author = record.author_name();
        let repo = record.repo_id().map(|repo_id| RepoUris {
            x1: minter.hashed(repo_id),
            appellation: minter.hashed(&tagged(repo_id, "X1 Appellation")),
            name: repo_name(repo_id),
        });
        EltecUris {
            f1: minter.random(),
            f2: minter.random(),
            x2: minter.random(),
            x2_e42: minter.random(),
            e35: minter.random(),
            f27: minter.random(),
            f28: minter.random(),
            e39: minter.hashed(author),
            e39_e41: minter.hashed(&tagged(author, "E41")),
            repo,
            work_ids: record
                .work_ids()
                .iter()
                .map(|_| (minter.random(), minter.random()))
                .collect(),
            author_ids: record
                .author_ids()
                .iter()
                .map(|id| (minter.hashed(id.value()), minter.hashed(&tagged(id.value(), "E42"))))
                .collect(),
            shared: EltecShared::new(minter),
        }
    }

    fn fragments(
        record: &EltecRecord,
        uris: &EltecUris,
        vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError> {
        let title = record.work_title();
        let author = record.author_name();
        let shared = &uris.shared;
        let tei = mandatory(vocabs, vocab::FORMAT, "TEI")?;

        let mut fragments = Vec::new();

        fragments.push(
            Fragment::new(&uris.f1)
                .with(rdf::TYPE, lrmoo::F1_WORK)
                .with(rdfs::LABEL, lit(tagged(title, "Work")))
                .with(lrmoo::R16I_WAS_CREATED_BY, &uris.f27)
                .with(lrmoo::R3_IS_REALISED_IN, &uris.f2),
        );

        let embodiments = std::iter::once(uris.x2.clone()).chain(uris.work_ids.iter().map(|(f3, _)| f3.clone()));
        fragments.push(
            Fragment::new(&uris.f2)
                .with(rdf::TYPE, lrmoo::F2_EXPRESSION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression")))
                .with(crm::P102_HAS_TITLE, &uris.e35)
                .with(lrmoo::R3I_REALISES, &uris.f1)
                .with(lrmoo::R17I_WAS_CREATED_BY, &uris.f28)
                .with(lrmoo::R4I_IS_EMBODIED_IN, fan_out(embodiments)),
        );

        if let Some(repo) = &uris.repo {
            fragments.push(
                Fragment::new(&repo.x1)
                    .with(rdf::TYPE, crmcls::X1_CORPUS)
                    .with(rdfs::LABEL, lit(tagged(&repo.name, "Corpus")))
                    .with(
                        crm::P1_IS_IDENTIFIED_BY,
                        Fragment::new(&repo.appellation)
                            .with(rdf::TYPE, crm::E41_APPELLATION)
                            .with(rdf::VALUE, lit(repo.name.as_str())),
                    )
                    .with(lrmoo::R71_HAS_PART, &uris.x2)
                    .with(crmcls::Y4I_IS_SUBCORPUS_OF, &shared.x1_eltec),
            );
        }

        fragments.push(
            Fragment::new(&shared.x1_eltec)
                .with(rdf::TYPE, crmcls::X1_CORPUS)
                .with_opt(crmcls::Y4_HAS_SUBCORPUS, uris.repo.as_ref().map(|r| &r.x1))
                .with(crm::P148_HAS_COMPONENT, &uris.x2),
        );

        fragments.push(
            Fragment::new(&uris.x2)
                .with(rdf::TYPE, crmcls::X2_CORPUS_DOCUMENT)
                .with(rdfs::LABEL, lit(tagged(title, "TEI Document")))
                .with(crm::P1_IS_IDENTIFIED_BY, &uris.x2_e42)
                .with(lrmoo::R4_EMBODIES, &uris.f2)
                .with_opt(lrmoo::R71I_IS_PART_OF, uris.repo.as_ref().map(|r| &r.x1))
                .with(crmcls::Y2_HAS_FORMAT, tei)
                .with(crmcls::Y3_ADHERES_TO_SCHEMA, &shared.x8)
                .with(crm::P137_EXEMPLIFIES, &shared.x11_eltec),
        );

        fragments.push(
            Fragment::new(&uris.x2_e42)
                .with(rdf::TYPE, crm::E42_IDENTIFIER)
                .with(rdfs::LABEL, lit(tagged(title, "ELTeC ID")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(record.file_stem()))
                .with(crm::P2_HAS_TYPE, &shared.e55_id),
        );

        fragments.push(Fragment::new(&shared.x8).with(crmcls::Y3I_IS_SCHEMA_OF, &uris.x2));

        for (work_id, (f3, e42)) in record.work_ids().iter().zip(&uris.work_ids) {
            let source_type = vocabs.lookup_optional(vocab::SOURCE_TYPE, &work_id.source_type().vocab_label());
            fragments.push(
                Fragment::new(f3)
                    .with(rdf::TYPE, lrmoo::F3_MANIFESTATION)
                    .with(rdfs::LABEL, lit(tagged(title, "Manifestation")))
                    .with(crm::P1_IS_IDENTIFIED_BY, e42)
                    .with(lrmoo::R4_EMBODIES, &uris.f2)
                    .with_opt(crm::P2_HAS_TYPE, source_type),
            );
            fragments.push(identifier(e42, title, work_id.identifier(), vocabs));
        }

        fragments.push(
            Fragment::new(&uris.f27)
                .with(rdf::TYPE, lrmoo::F27_WORK_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Work Creation")))
                .with(crm::P14_CARRIED_OUT_BY, &uris.e39)
                .with(lrmoo::R16_CREATED, &uris.f1),
        );

        let time_span = record.date().map(|year| {
            blank()
                .with(rdf::TYPE, crm::E52_TIME_SPAN)
                .with(crm::P82_AT_SOME_TIME_WITHIN, Literal::g_year(year))
        });
        fragments.push(
            Fragment::new(&uris.f28)
                .with(rdf::TYPE, lrmoo::F28_EXPRESSION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression Creation")))
                .with(crm::P14_CARRIED_OUT_BY, &uris.e39)
                .with(lrmoo::R17_CREATED, &uris.f2)
                .with_opt(crm::P4_HAS_TIME_SPAN, time_span),
        );

        fragments.push(
            Fragment::new(&uris.e35)
                .with(rdf::TYPE, crm::E35_TITLE)
                .with(crm::P102I_IS_TITLE_OF, &uris.f2)
                .with(crm::P2_HAS_TYPE, &shared.e55_title)
                .with(rdfs::LABEL, lit(tagged(title, "Title of Expression")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(title)),
        );

        let appellations = std::iter::once(uris.e39_e41.clone()).chain(uris.author_ids.iter().map(|(_, e42)| e42.clone()));
        fragments.push(
            Fragment::new(&uris.e39)
                .with(rdf::TYPE, crm::E39_ACTOR)
                .with(rdfs::LABEL, lit(tagged(author, "Actor")))
                .with(crm::P14I_PERFORMED, fan_out([&uris.f27, &uris.f28]))
                .with(crm::P1_IS_IDENTIFIED_BY, fan_out(appellations))
                .with(owl::SAME_AS, fan_out(uris.author_ids.iter().map(|(actor, _)| actor))),
        );

        fragments.push(
            Fragment::new(&uris.e39_e41)
                .with(rdf::TYPE, crm::E41_APPELLATION)
                .with(rdfs::LABEL, lit("ELTeC Author Name [Appellation]"))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(author))
                .with(crm::P2_HAS_TYPE, &shared.e55_author_name)
                .with(crm::P1I_IDENTIFIES, &uris.e39),
        );

        for (id, (_, e42)) in record.author_ids().iter().zip(&uris.author_ids) {
            fragments.push(identifier(e42, author, id, vocabs));
        }

        fragments.push(Fragment::new(&shared.e55_title).with(crm::P2I_IS_TYPE_OF, &uris.e35));
        fragments.push(Fragment::new(&shared.e55_id).with(crm::P2I_IS_TYPE_OF, &uris.x2_e42));
        fragments.push(Fragment::new(&shared.e55_author_name).with(crm::P2I_IS_TYPE_OF, &uris.e39_e41));

        Ok(fragments)
    }

    fn singletons(minter: &Minter) -> Vec<Fragment> {
        let shared = EltecShared::new(minter);
        vec![
            Fragment::new(&shared.e55_title)
                .with(rdf::TYPE, crm::E55_TYPE)
                .with(rdfs::LABEL, lit("ELTeC Work Title")),
            Fragment::new(&shared.e55_id)
                .with(rdf::TYPE, crm::E55_TYPE)
                .with(rdfs::LABEL, lit("ELTeC Corpus Document ID")),
            Fragment::new(&shared.e55_author_name)
                .with(rdf::TYPE, crm::E55_TYPE)
                .with(rdfs::LABEL, lit("ELTeC Author Name")),
            Fragment::new(&shared.schema)
                .with(rdf::TYPE, crm::E42_IDENTIFIER)
                .with(rdfs::LABEL, lit("Link to ELTeC Level 1 RNG Schema"))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(SCHEMA_LEVEL1)),
            Fragment::new(&shared.x8)
                .with(rdf::TYPE, crmcls::X8_SCHEMA)
                .with(rdfs::LABEL, lit("ELTeC Level 1 RNG Schema"))
                .with(crm::P1_IS_IDENTIFIED_BY, &shared.schema),
            Fragment::new(&shared.x11_eltec)
                .with(rdf::TYPE, crmcls::X11_PROTOTYPICAL_DOCUMENT)
                .with(rdfs::LABEL, lit("ELTeC [Prototypical Document]")),
        ]
    }
}

/// An identifier entity, typed when its type resolves.
fn identifier(uri: &Iri, owner: &str, id: &Identifier, vocabs: &Vocabularies) -> Fragment {
    let id_type = id
        .id_type()
        .and_then(|t| vocabs.lookup_optional(vocab::IDENTIFIER, t));
    Fragment::new(uri)
        .with(rdf::TYPE, crm::E42_IDENTIFIER)
        .with(rdfs::LABEL, lit(tagged(owner, "ID")))
        .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(id.value()))
        .with_opt(crm::P2_HAS_TYPE, id_type)
}

/// `eltec-eng` → `ELTeC ENG`.
fn repo_name(repo_id: &str) -> String {
    let language = repo_id.split_once('-').map_or(repo_id, |(_, lang)| lang);
    format!("ELTeC {}", language.to_uppercase())
}
