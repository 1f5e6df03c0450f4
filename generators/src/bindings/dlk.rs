//! DLK Binding Records.

use serde::Deserialize;

use super::{http_url, optional, optional_g_year, required};
use crate::error::ValidationError;

/// Raw DLK record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DlkFields {
    /// URL of the document in the DLK.
    pub resource_uri: Option<String>,
    /// DLK document id.
    pub dlk_id: Option<String>,
    /// URN of the document.
    pub urn: Option<String>,
    /// Title from the title statement.
    pub title: Option<String>,
    /// Title supplied by the cataloguer when the document has none.
    pub artificial_title: Option<String>,
    /// Authors. `null` means none.
    #[serde(default)]
    pub authors: Option<Vec<AuthorFields>>,
    /// Publication year.
    pub publication_date: Option<String>,
}

/// Raw DLK author.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorFields {
    /// Given name.
    pub forename: Option<String>,
    /// Family name.
    pub surname: Option<String>,
    /// `"{forename} {surname}"`.
    pub full_name: Option<String>,
}

/// A validated DLK author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    forename: String,
    surname: String,
    full_name: String,
}

impl Author {
    /// Given name.
    pub fn forename(&self) -> &str {
        &self.forename
    }

    /// Family name.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

/// The record's title, real or artificial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    /// Taken from the document.
    Given(String),
    /// Supplied by the cataloguer.
    Artificial(String),
}

impl Title {
    /// The title text.
    pub fn as_str(&self) -> &str {
        match self {
            Title::Given(t) | Title::Artificial(t) => t,
        }
    }

    /// `true` for a cataloguer-supplied title.
    pub fn is_artificial(&self) -> bool {
        matches!(self, Title::Artificial(_))
    }
}

/// A validated DLK record.
#[derive(Debug, Clone)]
pub struct DlkRecord {
    resource_uri: String,
    dlk_id: String,
    urn: Option<String>,
    title: Title,
    authors: Vec<Author>,
    publication_date: Option<String>,
}

impl DlkRecord {
    /// URL of the document.
    pub fn resource_uri(&self) -> &str {
        &self.resource_uri
    }

    /// DLK document id.
    pub fn dlk_id(&self) -> &str {
        &self.dlk_id
    }

    /// URN, when known.
    pub fn urn(&self) -> Option<&str> {
        self.urn.as_deref()
    }

    /// Effective title.
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Authors in input order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Publication year.
    pub fn publication_date(&self) -> Option<&str> {
        self.publication_date.as_deref()
    }
}

/// Validates raw DLK fields.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered; in particular a
/// [`ValidationError::Constraint`] on `authors[i].full_name` when it is not
/// `"{forename} {surname}"`.
pub fn validate(fields: DlkFields) -> Result<DlkRecord, ValidationError> {
    let resource_uri = http_url("resource_uri", required("resource_uri", fields.resource_uri)?)?;
    let dlk_id = required("dlk_id", fields.dlk_id)?;
    let urn = optional(fields.urn);

    let title = match (optional(fields.title), optional(fields.artificial_title)) {
        (Some(title), _) => Title::Given(title),
        (None, Some(title)) => Title::Artificial(title),
        (None, None) => {
            return Err(ValidationError::constraint(
                "title",
                "either title or artificial_title is required",
            ))
        }
    };

    let authors = fields
        .authors
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, raw)| validate_author(&format!("authors[{i}]"), raw))
        .collect::<Result<Vec<_>, _>>()?;

    let publication_date = optional_g_year("publication_date", fields.publication_date)?;

    Ok(DlkRecord {
        resource_uri,
        dlk_id,
        urn,
        title,
        authors,
        publication_date,
    })
}

fn validate_author(field: &str, raw: AuthorFields) -> Result<Author, ValidationError> {
    let forename = required(&format!("{field}.forename"), raw.forename)?;
    let surname = required(&format!("{field}.surname"), raw.surname)?;
    let full_name = required(&format!("{field}.full_name"), raw.full_name)?;
    let expected = format!("{forename} {surname}");
    if full_name != expected {
        return Err(ValidationError::constraint(
            format!("{field}.full_name"),
            format!("`{full_name}` must equal forename and surname joined by a space (`{expected}`)"),
        ));
    }
    Ok(Author {
        forename,
        surname,
        full_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(forename: &str, surname: &str, full_name: &str) -> AuthorFields {
        AuthorFields {
            forename: Some(forename.into()),
            surname: Some(surname.into()),
            full_name: Some(full_name.into()),
        }
    }

    fn minimal() -> DlkFields {
        DlkFields {
            resource_uri: Some("https://dlk.example.org/doc/17".into()),
            dlk_id: Some("dlk-17".into()),
            title: Some("Der Prozess".into()),
            authors: Some(vec![author("Franz", "Kafka", "Franz Kafka")]),
            ..DlkFields::default()
        }
    }

    #[test]
    fn real_title_wins() {
        let fields = DlkFields {
            artificial_title: Some("[Ohne Titel]".into()),
            ..minimal()
        };
        let record = validate(fields).unwrap();
        assert_eq!(record.title(), &Title::Given("Der Prozess".into()));
        assert_eq!(record.authors()[0].full_name(), "Franz Kafka");
    }

    #[test]
    fn artificial_title_fallback() {
        let fields = DlkFields {
            title: None,
            artificial_title: Some("[Ohne Titel]".into()),
            ..minimal()
        };
        let record = validate(fields).unwrap();
        assert!(record.title().is_artificial());
        assert_eq!(record.title().as_str(), "[Ohne Titel]");
    }

    #[test]
    fn some_title_is_required() {
        let fields = DlkFields {
            title: Some(String::new()),
            ..minimal()
        };
        assert_eq!(validate(fields).unwrap_err().field(), "title");
    }

    #[test]
    fn full_name_mismatch_is_a_hard_failure() {
        let fields = DlkFields {
            authors: Some(vec![
                author("Franz", "Kafka", "Franz Kafka"),
                author("Max", "Brod", "Brod, Max"),
            ]),
            ..minimal()
        };
        let err = validate(fields).unwrap_err();
        assert_eq!(err.field(), "authors[1].full_name");
        assert!(matches!(err, ValidationError::Constraint { .. }));
    }

    #[test]
    fn publication_date_must_be_a_year() {
        let fields = DlkFields {
            publication_date: Some("circa 1925".into()),
            ..minimal()
        };
        assert_eq!(validate(fields).unwrap_err().field(), "publication_date");
    }

    #[test]
    fn resource_uri_must_be_an_http_url() {
        for uri in ["dlk/doc/17", "https://dlk.example.org/doc 17"] {
            let fields = DlkFields {
                resource_uri: Some(uri.into()),
                ..minimal()
            };
            assert_eq!(validate(fields).unwrap_err().field(), "resource_uri");
        }
    }
}
