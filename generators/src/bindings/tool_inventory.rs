//! Tool inventory Binding Records, one per CSV row.

use serde::Deserialize;

use super::{http_url, optional, required};
use crate::error::ValidationError;

/// Raw CSV row. Empty cells deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolFields {
    /// Tool name.
    pub name: Option<String>,
    /// Homepage or repository.
    pub url: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// License statement.
    pub license: Option<String>,
    /// Project deliverable the tool is described in.
    pub deliverable: Option<String>,
    /// Further notes.
    pub notes: Option<String>,
    /// Comma-separated developer names.
    pub developers: Option<String>,
    /// Comma-separated `method` vocabulary terms.
    pub methods: Option<String>,
    /// Comma-separated `format` vocabulary terms.
    pub formats: Option<String>,
}

/// A free-text column attached to a tool as a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// `description`
    Description,
    /// `license`
    License,
    /// `deliverable`
    Deliverable,
    /// `notes`
    Notes,
}

impl NoteKind {
    /// Column name.
    pub fn column(self) -> &'static str {
        match self {
            NoteKind::Description => "description",
            NoteKind::License => "license",
            NoteKind::Deliverable => "deliverable",
            NoteKind::Notes => "notes",
        }
    }

    /// Label of the note type entity.
    pub fn type_label(self) -> &'static str {
        match self {
            NoteKind::Description => "Tool Description",
            NoteKind::License => "Tool License",
            NoteKind::Deliverable => "Tool Deliverable",
            NoteKind::Notes => "Tool Note",
        }
    }

    /// All note columns in output order.
    pub const ALL: [NoteKind; 4] = [
        NoteKind::Description,
        NoteKind::License,
        NoteKind::Deliverable,
        NoteKind::Notes,
    ];
}

/// A validated tool row.
#[derive(Debug, Clone)]
pub struct ToolRecord {
    name: String,
    url: Option<String>,
    notes: Vec<(NoteKind, String)>,
    developers: Vec<String>,
    methods: Vec<String>,
    formats: Vec<String>,
}

impl ToolRecord {
    /// Tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Homepage URL.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Present free-text columns in [`NoteKind::ALL`] order.
    pub fn notes(&self) -> &[(NoteKind, String)] {
        &self.notes
    }

    /// Developer names.
    pub fn developers(&self) -> &[String] {
        &self.developers
    }

    /// Method terms as written.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Format terms as written.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

/// Validates one CSV row.
///
/// Method and format terms are kept as written; the generator resolves each
/// one and drops those the vocabulary does not know.
///
/// # Errors
///
/// [`ValidationError`] when the name is missing or the URL is not absolute.
pub fn validate(fields: ToolFields) -> Result<ToolRecord, ValidationError> {
    let name = required("name", fields.name)?;
    let url = optional(fields.url).map(|u| http_url("url", u.trim().to_owned())).transpose()?;

    let notes = NoteKind::ALL
        .into_iter()
        .zip([fields.description, fields.license, fields.deliverable, fields.notes])
        .filter_map(|(kind, text)| optional(text).map(|t| (kind, t.trim().to_owned())))
        .collect();

    Ok(ToolRecord {
        name: name.trim().to_owned(),
        url,
        notes,
        developers: split_list(fields.developers),
        methods: split_list(fields.methods),
        formats: split_list(fields.formats),
    })
}

/// Splits a comma-separated cell, trimming items and dropping empty ones.
pub(crate) fn split_list(cell: Option<String>) -> Vec<String> {
    cell.map(|cell| {
        cell.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_multi_valued_cells() {
        assert_eq!(
            split_list(Some(" stylometry, ,topic modeling ".into())),
            vec!["stylometry".to_owned(), "topic modeling".to_owned()]
        );
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn notes_keep_column_order() {
        let record = validate(ToolFields {
            name: Some("stylo".into()),
            notes: Some("R package".into()),
            description: Some("Stylometric analysis".into()),
            ..ToolFields::default()
        })
        .unwrap();
        let kinds: Vec<_> = record.notes().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![NoteKind::Description, NoteKind::Notes]);
    }

    #[test]
    fn url_must_be_absolute() {
        let err = validate(ToolFields {
            name: Some("stylo".into()),
            url: Some("github.com/computationalstylistics/stylo".into()),
            ..ToolFields::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "url");
    }

    #[test]
    fn name_is_required() {
        assert_eq!(validate(ToolFields::default()).unwrap_err().field(), "name");
    }
}
