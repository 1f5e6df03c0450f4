//! ELTeC Binding Records.

use serde::Deserialize;

use super::{
    infer_id_type, optional, optional_g_year, required, IdFields, Identifier, SourceType,
};
use crate::error::ValidationError;
use crate::vocab::Vocabularies;

/// Raw ELTeC record as extracted from a TEI header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EltecFields {
    /// Raw URL of the TEI document.
    pub resource_uri: Option<String>,
    /// Title of the work.
    pub work_title: Option<String>,
    /// Author name as given in the title statement.
    pub author_name: Option<String>,
    /// Lower-cased file name without extension; derived when absent.
    pub file_stem: Option<String>,
    /// Lower-cased repository id (`eltec-eng`); derived when absent.
    pub repo_id: Option<String>,
    /// Work identifiers from the source description. `null` means none.
    #[serde(default)]
    pub work_ids: Option<Vec<SourceIdFields>>,
    /// Author identifiers. `null` means none.
    #[serde(default)]
    pub author_ids: Option<Vec<IdFields>>,
    /// Date of the first edition, as a year.
    pub date: Option<String>,
}

/// Raw work identifier with its source type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceIdFields {
    /// Identifier value.
    pub id_value: Option<String>,
    /// Identifier type, a term of the `identifier` vocabulary.
    pub id_type: Option<String>,
    /// `firstEdition`, `printSource`, `digitalSource` or `unspecified`.
    pub source_type: Option<String>,
}

/// A validated work identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkId {
    identifier: Identifier,
    source_type: SourceType,
}

impl WorkId {
    /// The identifier.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Where the identified edition comes from.
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }
}

/// A validated ELTeC record.
#[derive(Debug, Clone)]
pub struct EltecRecord {
    resource_uri: String,
    work_title: String,
    author_name: String,
    file_stem: String,
    repo_id: Option<String>,
    work_ids: Vec<WorkId>,
    author_ids: Vec<Identifier>,
    date: Option<String>,
}

impl EltecRecord {
    /// Raw URL of the TEI document.
    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    /// Title of the work.
    pub fn work_title(&self) -> &str {
        &self.work_title
    }

    /// Author name.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// File stem used as the ELTeC document id.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Repository id, when known.
    pub fn repo_id(&self) -> Option<&str> {
        self.repo_id.as_deref()
    }

    /// Work identifiers.
    pub fn work_ids(&self) -> &[WorkId] {
        &self.work_ids
    }

    /// Author identifiers.
    pub fn author_ids(&self) -> &[Identifier] {
        &self.author_ids
    }

    /// First edition year.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Validates raw ELTeC fields.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(fields: EltecFields, vocabs: &Vocabularies) -> Result<EltecRecord, ValidationError> {
    let resource_uri = super::http_url("resource_uri", required("resource_uri", fields.resource_uri)?)?;
    let work_title = required("work_title", fields.work_title)?;
    let author_name = required("author_name", fields.author_name)?;

    let file_stem = match optional(fields.file_stem) {
        Some(stem) => stem,
        None => derive_file_stem(&resource_uri)
            .ok_or_else(|| ValidationError::constraint("file_stem", "cannot be derived from resource_uri"))?,
    };
    let repo_id = optional(fields.repo_id).or_else(|| derive_repo_id(&resource_uri));

    let work_ids = fields
        .work_ids
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let field = format!("work_ids[{i}]");
            let identifier = Identifier::validate(
                &field,
                IdFields {
                    id_value: raw.id_value,
                    id_type: raw.id_type,
                },
                vocabs,
            )?;
            let source_type = SourceType::parse(&format!("{field}.source_type"), raw.source_type)?;
            Ok(WorkId {
                identifier,
                source_type,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let author_ids = fields
        .author_ids
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, raw)| Identifier::validate(&format!("author_ids[{i}]"), raw, vocabs))
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let date = optional_g_year("date", fields.date)?;

    Ok(EltecRecord {
        resource_uri,
        work_title,
        author_name,
        file_stem,
        repo_id,
        work_ids,
        author_ids,
        date,
    })
}

/// Applies the identifier containment heuristic to untyped identifiers.
pub fn infer_id_types(fields: &mut EltecFields, vocabs: &Vocabularies) {
    for id in fields.author_ids.iter_mut().flatten() {
        infer_id_type(id, vocabs);
    }
    for id in fields.work_ids.iter_mut().flatten() {
        let mut pair = IdFields {
            id_value: id.id_value.take(),
            id_type: id.id_type.take(),
        };
        infer_id_type(&mut pair, vocabs);
        id.id_value = pair.id_value;
        id.id_type = pair.id_type;
    }
}

fn path_segments(uri: &str) -> Vec<&str> {
    uri.split('/').filter(|s| !s.is_empty()).collect()
}

/// Last path segment without extension, lower-cased.
fn derive_file_stem(uri: &str) -> Option<String> {
    let last = *path_segments(uri).last()?;
    let stem = last.rsplit_once('.').map_or(last, |(stem, _)| stem);
    (!stem.is_empty()).then(|| stem.to_lowercase())
}

/// Fourth segment of `scheme:/host/org/repo/...`, lower-cased.
fn derive_repo_id(uri: &str) -> Option<String> {
    path_segments(uri).get(3).map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str =
        "https://raw.githubusercontent.com/COST-ELTeC/ELTeC-eng/master/level1/ENG18400_Trollope.xml";

    fn minimal() -> EltecFields {
        EltecFields {
            resource_uri: Some(URI.into()),
            work_title: Some("Foo".into()),
            author_name: Some("Bar Baz".into()),
            ..EltecFields::default()
        }
    }

    #[test]
    fn derives_stem_and_repo() {
        let record = validate(minimal(), &Vocabularies::builtin().unwrap()).unwrap();
        assert_eq!(record.file_stem(), "eng18400_trollope");
        assert_eq!(record.repo_id(), Some("eltec-eng"));
        assert!(record.work_ids().is_empty());
        assert!(record.author_ids().is_empty());
    }

    #[test]
    fn short_uri_has_no_repo() {
        let fields = EltecFields {
            resource_uri: Some("https://example.org/doc.xml".into()),
            ..minimal()
        };
        let record = validate(fields, &Vocabularies::builtin().unwrap()).unwrap();
        assert_eq!(record.repo_id(), None);
        assert_eq!(record.file_stem(), "doc");
    }

    #[test]
    fn missing_title_fails() {
        let fields = EltecFields {
            work_title: None,
            ..minimal()
        };
        let err = validate(fields, &Vocabularies::builtin().unwrap()).unwrap_err();
        assert_eq!(err.field(), "work_title");
    }

    #[test]
    fn nested_ids_validate_recursively() {
        let fields = EltecFields {
            work_ids: Some(vec![SourceIdFields {
                id_value: Some("x".into()),
                id_type: None,
                source_type: Some("reprint".into()),
            }]),
            ..minimal()
        };
        let err = validate(fields, &Vocabularies::builtin().unwrap()).unwrap_err();
        assert_eq!(err.field(), "work_ids[0].source_type");
    }

    #[test]
    fn null_id_lists_are_empty() {
        let fields: EltecFields = serde_json::from_str(&format!(
            r#"{{"resource_uri": "{URI}", "work_title": "Foo", "author_name": "Bar Baz",
                "work_ids": null, "author_ids": null}}"#
        ))
        .unwrap();
        let record = validate(fields, &Vocabularies::builtin().unwrap()).unwrap();
        assert!(record.work_ids().is_empty());
    }
}
