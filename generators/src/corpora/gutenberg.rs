//! Project Gutenberg generator, fed from Gutendex book objects.

use clscor_ontology::fragment::{blank, fan_out, lit, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Literal};
use clscor_ontology::namespaces::{crm, crmcls, iso6391, lrmoo, rdf, rdfs};

use super::{tagged, Corpus};
use crate::bindings::gutenberg::{self, GutenbergFields, GutenbergRecord, JPEG, RDF_XML};
use crate::error::{GenerateError, ValidationError};
use crate::vocab::Vocabularies;

/// The Project Gutenberg corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gutenberg;

/// URIs shared by every Gutenberg record.
#[derive(Debug, Clone)]
pub struct GutenbergShared {
    /// Project Gutenberg as a corpus.
    pub x1: Iri,
    /// The Gutenberg prototypical document.
    pub x11: Iri,
    /// Type of ebook numbers.
    pub e55_id: Iri,
    /// Type of ebook URLs.
    pub e55_id_url: Iri,
}

impl GutenbergShared {
    /// Derives the shared URIs.
    pub fn new(minter: &Minter) -> Self {
        Self {
            x1: minter.hashed("Gutenberg [X1]"),
            x11: minter.hashed("Gutenberg [X11]"),
            e55_id: minter.hashed("Gutenberg ID [Type]"),
            e55_id_url: minter.hashed("Gutenberg ID URL [Type]"),
        }
    }
}

/// Entity URI Namespace of one Gutenberg record.
#[derive(Debug, Clone)]
pub struct GutenbergUris {
    /// Work.
    pub f1: Iri,
    /// Expression.
    pub f2: Iri,
    /// Corpus document.
    pub x2: Iri,
    /// Work creation.
    pub f27: Iri,
    /// Expression creation.
    pub f28: Iri,
    /// `(actor, appellation)` per author, keyed by name.
    pub authors: Vec<(Iri, Iri)>,
    /// Run-level URIs.
    pub shared: GutenbergShared,
}

impl Corpus for Gutenberg {
    const NAME: &'static str = "gutenberg";

    type Fields = GutenbergFields;
    type Record = GutenbergRecord;
    type Uris = GutenbergUris;

    fn validate(fields: GutenbergFields, _vocabs: &Vocabularies) -> Result<GutenbergRecord, ValidationError> {
        gutenberg::validate(fields)
    }

    fn label(fields: &GutenbergFields) -> Option<String> {
        fields.id.map(|id| id.to_string())
    }

    fn allocate(record: &GutenbergRecord, minter: &Minter) -> GutenbergUris {
        GutenbergUris {
            f1: minter.random(),
            f2: minter.random(),
            x2: minter.random(),
            f27: minter.random(),
            f28: minter.random(),
            authors: record
                .authors()
                .iter()
                .map(|name| (minter.hashed(name), minter.hashed(&tagged(name, "Actor Appellation"))))
                .collect(),
            shared: GutenbergShared::new(minter),
        }
    }

    fn fragments(
        record: &GutenbergRecord,
        uris: &GutenbergUris,
        _vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError> {
        let title = record.title();
        let shared = &uris.shared;
        let actors: Vec<&Iri> = uris.authors.iter().map(|(actor, _)| actor).collect();

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
                .with(lrmoo::R4I_IS_EMBODIED_IN, &uris.x2)
                .with(lrmoo::R17I_WAS_CREATED_BY, &uris.f28),
            Fragment::new(&uris.f27)
                .with(rdf::TYPE, lrmoo::F27_WORK_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Work Creation")))
                .with(lrmoo::R16_CREATED, &uris.f1)
                .with(crm::P14_CARRIED_OUT_BY, fan_out(actors.iter().copied())),
            Fragment::new(&uris.f28)
                .with(rdf::TYPE, lrmoo::F28_EXPRESSION_CREATION)
                .with(rdfs::LABEL, lit(tagged(title, "Expression Creation")))
                .with(lrmoo::R17_CREATED, &uris.f2)
                .with(crm::P14_CARRIED_OUT_BY, fan_out(actors.iter().copied())),
        ];

        for (name, (actor, appellation)) in record.authors().iter().zip(&uris.authors) {
            fragments.push(
                Fragment::new(actor)
                    .with(rdf::TYPE, crm::E39_ACTOR)
                    .with(rdfs::LABEL, lit(tagged(name, "Actor")))
                    .with(
                        crm::P1_IS_IDENTIFIED_BY,
                        Fragment::new(appellation)
                            .with(rdf::TYPE, crm::E41_APPELLATION)
                            .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(name.as_str())),
                    )
                    .with(crm::P14I_PERFORMED, fan_out([&uris.f27, &uris.f28])),
            );
        }

        let visual_item = record.format(JPEG).map(|image| {
            blank()
                .with(rdf::TYPE, crm::E36_VISUAL_ITEM)
                .with(rdfs::LABEL, lit(tagged(title, "Visual Item")))
                .with(crm::P138_REPRESENTS, &uris.x2)
                .with(
                    crm::P1_IS_IDENTIFIED_BY,
                    blank()
                        .with(rdf::TYPE, crm::E42_IDENTIFIER)
                        .with(crm::P190_HAS_SYMBOLIC_CONTENT, Literal::any_uri(image)),
                )
        });
        let identifiers = [
            blank()
                .with(rdf::TYPE, crm::E42_IDENTIFIER)
                .with(rdfs::LABEL, lit(tagged(title, "Gutenberg ID")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, Literal::integer(record.id()))
                .with(crm::P2_HAS_TYPE, &shared.e55_id),
            blank()
                .with(rdf::TYPE, crm::E42_IDENTIFIER)
                .with(rdfs::LABEL, lit(tagged(title, "Gutenberg ID URL")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, Literal::any_uri(record.id_url()))
                .with(crm::P2_HAS_TYPE, &shared.e55_id_url),
        ];

        fragments.push(
            Fragment::new(&uris.x2)
                .with(rdf::TYPE, crmcls::X2_CORPUS_DOCUMENT)
                .with(rdfs::LABEL, lit(tagged(title, "Corpus Document Title")))
                .with_opt(rdfs::SEE_ALSO, record.format(RDF_XML).map(Iri::from))
                .with(lrmoo::R4_EMBODIES, &uris.f2)
                .with(lrmoo::R71I_IS_PART_OF, &shared.x1)
                .with(
                    crm::P148I_IS_COMPONENT_OF,
                    Fragment::new(&shared.x1)
                        .with(crm::P148_HAS_COMPONENT, &uris.x2)
                        .with(lrmoo::R71_HAS_PART, &uris.x2),
                )
                .with(crm::P137_EXEMPLIFIES, &shared.x11)
                .with(
                    crm::P72_HAS_LANGUAGE,
                    fan_out(record.languages().iter().map(|code| iso6391::language(code))),
                )
                .with(crm::P1_IS_IDENTIFIED_BY, fan_out(identifiers))
                .with_opt(crm::P148_HAS_COMPONENT, visual_item),
        );

        Ok(fragments)
    }

    fn singletons(minter: &Minter) -> Vec<Fragment> {
        let shared = GutenbergShared::new(minter);
        vec![
            Fragment::new(&shared.e55_id)
                .with(rdf::TYPE, crm::E55_TYPE)
                .with(rdfs::LABEL, lit("Gutenberg Document ID")),
            Fragment::new(&shared.e55_id_url)
                .with(rdf::TYPE, crm::E55_TYPE)
                .with(rdfs::LABEL, lit("Gutenberg Document ID URL")),
            Fragment::new(&shared.x1)
                .with(rdf::TYPE, crmcls::X1_CORPUS)
                .with(rdfs::LABEL, lit("Project Gutenberg [Corpus]")),
            Fragment::new(&shared.x11)
                .with(rdf::TYPE, crmcls::X11_PROTOTYPICAL_DOCUMENT)
                .with(rdfs::LABEL, lit("Gutenberg [Prototypical Document]")),
        ]
    }
}
