//! Tool inventory generator: one software entity per CSV row.

use clscor_ontology::fragment::{blank, fan_out, lit, Fragment};
use clscor_ontology::mint::Minter;
use clscor_ontology::model::{Iri, Literal};
use clscor_ontology::namespaces::{crm, crmcls, crmdig, rdf, rdfs};
use tracing::warn;

use super::{tagged, Corpus};
use crate::bindings::tool_inventory::{self, NoteKind, ToolFields, ToolRecord};
use crate::error::{GenerateError, ValidationError};
use crate::vocab::{self, Vocabularies};

/// The tool inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolInventory;

/// URIs shared by every tool.
#[derive(Debug, Clone)]
pub struct ToolShared {
    /// Note types in [`NoteKind::ALL`] order.
    pub note_types: [Iri; 4],
    /// Type of tool URLs.
    pub e55_url: Iri,
}

impl ToolShared {
    /// Derives the shared URIs.
    pub fn new(minter: &Minter) -> Self {
        Self {
            note_types: NoteKind::ALL.map(|kind| minter.hashed(&tagged(kind.type_label(), "Type"))),
            e55_url: minter.hashed("Tool URL [Type]"),
        }
    }

    /// The note type of `kind`.
    pub fn note_type(&self, kind: NoteKind) -> &Iri {
        &self.note_types[kind as usize]
    }
}

/// Entity URI Namespace of one tool.
#[derive(Debug, Clone)]
pub struct ToolUris {
    /// The software, keyed by name.
    pub d14: Iri,
    /// URL identifier.
    pub url: Iri,
    /// Creation event.
    pub e65: Iri,
    /// One actor per developer, keyed by name.
    pub developers: Vec<Iri>,
    /// Run-level URIs.
    pub shared: ToolShared,
}

impl Corpus for ToolInventory {
    const NAME: &'static str = "tool-inventory";

    type Fields = ToolFields;
    type Record = ToolRecord;
    type Uris = ToolUris;

    fn validate(fields: ToolFields, _vocabs: &Vocabularies) -> Result<ToolRecord, ValidationError> {
        tool_inventory::validate(fields)
    }

    fn label(fields: &ToolFields) -> Option<String> {
        fields.name.clone()
    }

    fn allocate(record: &ToolRecord, minter: &Minter) -> ToolUris {
        ToolUris {
            d14: minter.hashed(&tagged(record.name(), "Software")),
            url: minter.random(),
            e65: minter.random(),
            developers: record.developers().iter().map(|name| minter.hashed(name)).collect(),
            shared: ToolShared::new(minter),
        }
    }

    fn fragments(
        record: &ToolRecord,
        uris: &ToolUris,
        vocabs: &Vocabularies,
    ) -> Result<Vec<Fragment>, GenerateError> {
        let name = record.name();

        let notes: Vec<_> = record
            .notes()
            .iter()
            .map(|(kind, text)| {
                blank()
                    .with(rdf::TYPE, crm::E33_LINGUISTIC_OBJECT)
                    .with(crm::P2_HAS_TYPE, uris.shared.note_type(*kind))
                    .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(text.as_str()))
            })
            .collect();

        let url = record.url().map(|url| {
            Fragment::new(&uris.url)
                .with(rdf::TYPE, crm::E42_IDENTIFIER)
                .with(rdfs::LABEL, lit(tagged(name, "URL")))
                .with(crm::P190_HAS_SYMBOLIC_CONTENT, Literal::any_uri(url))
                .with(crm::P2_HAS_TYPE, &uris.shared.e55_url)
        });

        let creation = (!uris.developers.is_empty()).then(|| {
            Fragment::new(&uris.e65)
                .with(rdf::TYPE, crm::E65_CREATION)
                .with(rdfs::LABEL, lit(tagged(name, "Creation")))
                .with(crm::P14_CARRIED_OUT_BY, fan_out(&uris.developers))
        });

        let mut fragments = vec![Fragment::new(&uris.d14)
            .with(rdf::TYPE, crmdig::D14_SOFTWARE)
            .with(rdfs::LABEL, lit(tagged(name, "Software")))
            .with(
                crm::P1_IS_IDENTIFIED_BY,
                blank()
                    .with(rdf::TYPE, crm::E41_APPELLATION)
                    .with(crm::P190_HAS_SYMBOLIC_CONTENT, lit(name)),
            )
            .with_opt(crm::P1_IS_IDENTIFIED_BY, url)
            .with(crm::P67I_IS_REFERRED_TO_BY, fan_out(notes))
            .with_opt(crm::P94I_WAS_CREATED_BY, creation)
            .with(crm::P2_HAS_TYPE, fan_out(resolve(vocabs, vocab::METHOD, name, record.methods())))
            .with(crmcls::Y2_HAS_FORMAT, fan_out(resolve(vocabs, vocab::FORMAT, name, record.formats())))];

        for (developer, uri) in record.developers().iter().zip(&uris.developers) {
            fragments.push(
                Fragment::new(uri)
                    .with(rdf::TYPE, crm::E39_ACTOR)
                    .with(rdfs::LABEL, lit(tagged(developer, "Actor")))
                    .with(crm::P14I_PERFORMED, &uris.e65),
            );
        }

        Ok(fragments)
    }

    fn singletons(minter: &Minter) -> Vec<Fragment> {
        let shared = ToolShared::new(minter);
        NoteKind::ALL
            .iter()
            .map(|kind| (shared.note_type(*kind), kind.type_label()))
            .chain([(&shared.e55_url, "Tool URL")])
            .map(|(uri, label)| {
                Fragment::new(uri)
                    .with(rdf::TYPE, crm::E55_TYPE)
                    .with(rdfs::LABEL, lit(label))
            })
            .collect()
    }
}

/// Resolves each term, dropping (and reporting) unknown ones.
fn resolve(vocabs: &Vocabularies, vocabulary: &str, tool: &str, terms: &[String]) -> Vec<Iri> {
    terms
        .iter()
        .filter_map(|term| match vocabs.lookup(vocabulary, term) {
            Ok(iri) => Some(iri),
            Err(err) => {
                warn!(tool, vocabulary, term = term.as_str(), %err, "omitting unknown term");
                None
            }
        })
        .collect()
}
