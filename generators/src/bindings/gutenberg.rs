//! Gutenberg Binding Records, read from Gutendex book objects.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{http_url, optional, required};
use crate::error::ValidationError;

/// Gutendex mime type of the RDF/XML catalog record.
pub const RDF_XML: &str = "application/rdf+xml";
/// Gutendex mime type of the cover image.
pub const JPEG: &str = "image/jpeg";

/// Raw Gutendex book object. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GutenbergFields {
    /// Ebook number.
    pub id: Option<i64>,
    /// Title.
    pub title: Option<String>,
    /// Authors.
    #[serde(default)]
    pub authors: Vec<PersonFields>,
    /// ISO 639-1 language codes.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Mime type to download URL.
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
    /// Landing page; defaults to the ebook page.
    pub id_url: Option<String>,
}

/// Raw Gutendex person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonFields {
    /// Name, usually `"Surname, Forename"`.
    pub name: Option<String>,
}

/// A validated Gutenberg record.
#[derive(Debug, Clone)]
pub struct GutenbergRecord {
    id: u64,
    title: String,
    authors: Vec<String>,
    languages: Vec<String>,
    formats: BTreeMap<String, String>,
    id_url: String,
}

impl GutenbergRecord {
    /// Ebook number.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author names in input order, duplicates removed.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Language codes in input order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The download URL for `mime`.
    pub fn format(&self, mime: &str) -> Option<&str> {
        self.formats.get(mime).map(String::as_str)
    }

    /// Landing page URL.
    pub fn id_url(&self) -> &str {
        &self.id_url
    }
}

/// Validates a Gutendex book object.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(fields: GutenbergFields) -> Result<GutenbergRecord, ValidationError> {
    let id = match fields.id {
        Some(id) if id > 0 => id.unsigned_abs(),
        Some(id) => return Err(ValidationError::constraint("id", format!("`{id}` is not a positive integer"))),
        None => return Err(ValidationError::missing("id")),
    };
    let title = required("title", fields.title)?;

    let mut authors: Vec<String> = Vec::with_capacity(fields.authors.len());
    for (i, person) in fields.authors.into_iter().enumerate() {
        let name = required(&format!("authors[{i}].name"), person.name)?;
        if !authors.contains(&name) {
            authors.push(name);
        }
    }

    for (i, code) in fields.languages.iter().enumerate() {
        let well_formed = (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_lowercase());
        if !well_formed {
            return Err(ValidationError::constraint(
                format!("languages[{i}]"),
                format!("`{code}` is not a lower-case ISO 639 code"),
            ));
        }
    }

    let mut formats = BTreeMap::new();
    for (mime, url) in fields.formats {
        let url = http_url(&format!("formats[{mime}]"), url)?;
        formats.insert(mime, url);
    }

    let id_url = match optional(fields.id_url) {
        Some(url) => http_url("id_url", url)?,
        None => format!("https://www.gutenberg.org/ebooks/{id}"),
    };

    Ok(GutenbergRecord {
        id,
        title,
        authors,
        languages: fields.languages,
        formats,
        id_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = r#"{
        "id": 84,
        "title": "Frankenstein; Or, The Modern Prometheus",
        "authors": [{"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851}],
        "translators": [],
        "subjects": ["Horror tales"],
        "languages": ["en"],
        "copyright": false,
        "formats": {
            "application/rdf+xml": "https://www.gutenberg.org/ebooks/84.rdf",
            "image/jpeg": "https://www.gutenberg.org/cache/epub/84/pg84.cover.medium.jpg"
        },
        "download_count": 100
    }"#;

    #[test]
    fn gutendex_book_validates() {
        let fields: GutenbergFields = serde_json::from_str(BOOK).unwrap();
        let record = validate(fields).unwrap();
        assert_eq!(record.id(), 84);
        assert_eq!(record.authors(), ["Shelley, Mary Wollstonecraft"]);
        assert_eq!(record.id_url(), "https://www.gutenberg.org/ebooks/84");
        assert!(record.format(JPEG).is_some());
        assert!(record.format("text/plain").is_none());
    }

    #[test]
    fn id_must_be_positive() {
        let fields = GutenbergFields {
            id: Some(0),
            title: Some("x".into()),
            ..GutenbergFields::default()
        };
        assert_eq!(validate(fields).unwrap_err().field(), "id");
    }

    #[test]
    fn language_codes_are_checked() {
        let fields = GutenbergFields {
            id: Some(1),
            title: Some("x".into()),
            languages: vec!["en".into(), "EN".into()],
            ..GutenbergFields::default()
        };
        assert_eq!(validate(fields).unwrap_err().field(), "languages[1]");
    }

    #[test]
    fn format_urls_must_be_writable_as_iris() {
        let fields = GutenbergFields {
            id: Some(84),
            title: Some("Frankenstein".into()),
            formats: BTreeMap::from([(RDF_XML.to_owned(), "https://www.gutenberg.org/ebooks/84 copy>.rdf".to_owned())]),
            ..GutenbergFields::default()
        };
        assert_eq!(validate(fields).unwrap_err().field(), "formats[application/rdf+xml]");
    }

    #[test]
    fn duplicate_authors_collapse() {
        let fields = GutenbergFields {
            id: Some(1),
            title: Some("x".into()),
            authors: vec![
                PersonFields { name: Some("A".into()) },
                PersonFields { name: Some("A".into()) },
            ],
            ..GutenbergFields::default()
        };
        assert_eq!(validate(fields).unwrap().authors().len(), 1);
    }
}
