//! ReM (Reference Corpus of Middle High German) Binding Records.

use serde::Deserialize;
use serde_json::Value;

use super::{http_url, optional, optional_g_year, required};
use crate::error::ValidationError;

/// Values the ReM headers use for "no data".
pub const PLACEHOLDERS: [&str; 3] = ["-", "NA", ""];

/// Replaces placeholder strings with `null`, recursively.
///
/// This is an input-format convention of the ReM headers and runs on the raw
/// JSON before deserialization.
pub fn sanitize_placeholders(value: &mut Value) {
    if matches!(value, Value::String(s) if PLACEHOLDERS.contains(&s.trim())) {
        *value = Value::Null;
        return;
    }
    match value {
        Value::Array(items) => items.iter_mut().for_each(sanitize_placeholders),
        Value::Object(map) => map.values_mut().for_each(sanitize_placeholders),
        _ => {}
    }
}

/// A token count as found in the headers: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    /// JSON number.
    Number(i64),
    /// JSON string.
    Text(String),
}

/// Raw ReM record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemFields {
    /// ReM document id (`M001-N1`).
    pub id: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Genre label.
    pub genre: Option<String>,
    /// Number of tokens.
    pub token_count: Option<RawCount>,
    /// Details page; defaults to the ReM corpus browser.
    pub resource_url: Option<String>,
    /// Edition the text was taken from.
    pub publication: Option<PublicationFields>,
    /// Manuscript the text is transmitted in.
    pub source: Option<SourceFields>,
}

/// Raw publication sub-record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationFields {
    /// Bibliographic reference.
    pub idno: Option<String>,
    /// Publication year.
    pub date: Option<String>,
}

/// Raw manuscript sub-record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceFields {
    /// Manuscript name.
    pub msname: Option<String>,
    /// Holding institution.
    pub repo: Option<String>,
    /// Shelfmark.
    pub idno: Option<String>,
    /// Handschriftencensus link.
    pub census_link: Option<String>,
    /// Not before (terminus post quem).
    pub tpq: Option<String>,
    /// Not after (terminus ante quem).
    pub taq: Option<String>,
}

/// Validated publication data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Publication {
    idno: Option<String>,
    date: Option<String>,
}

impl Publication {
    /// Bibliographic reference.
    pub fn idno(&self) -> Option<&str> {
        self.idno.as_deref()
    }

    /// Publication year.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Validated manuscript data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    msname: Option<String>,
    repo: String,
    idno: String,
    census_link: Option<String>,
    tpq: Option<String>,
    taq: Option<String>,
}

impl Source {
    /// Manuscript name.
    pub fn msname(&self) -> Option<&str> {
        self.msname.as_deref()
    }

    /// Holding institution.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Shelfmark.
    pub fn idno(&self) -> &str {
        &self.idno
    }

    /// Handschriftencensus link.
    pub fn census_link(&self) -> Option<&str> {
        self.census_link.as_deref()
    }

    /// Not-before year.
    pub fn tpq(&self) -> Option<&str> {
        self.tpq.as_deref()
    }

    /// Not-after year.
    pub fn taq(&self) -> Option<&str> {
        self.taq.as_deref()
    }
}

/// A validated ReM record.
#[derive(Debug, Clone)]
pub struct RemRecord {
    id: String,
    title: String,
    genre: Option<String>,
    token_count: u64,
    resource_url: String,
    publication: Publication,
    source: Source,
}

impl RemRecord {
    /// ReM document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Genre label.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Number of tokens.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    /// Details page URL.
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    /// Publication data.
    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    /// Manuscript data.
    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// Validates raw ReM fields.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(fields: RemFields) -> Result<RemRecord, ValidationError> {
    let id = required("id", fields.id)?;
    let title = required("title", fields.title)?;
    let genre = optional(fields.genre);
    let token_count = token_count(fields.token_count)?;
    let resource_url = match optional(fields.resource_url) {
        Some(url) => http_url("resource_url", url)?,
        None => format!("https://www.linguistics.rub.de/rem/corpus/details.html#{id}"),
    };

    let publication = fields.publication.unwrap_or_default();
    let publication = Publication {
        idno: optional(publication.idno),
        date: optional_g_year("publication.date", publication.date)?,
    };

    let source = fields.source.ok_or_else(|| ValidationError::missing("source"))?;
    let source = Source {
        msname: optional(source.msname),
        repo: required("source.repo", source.repo)?,
        idno: required("source.idno", source.idno)?,
        census_link: optional(source.census_link),
        tpq: optional_g_year("source.tpq", source.tpq)?,
        taq: optional_g_year("source.taq", source.taq)?,
    };

    Ok(RemRecord {
        id,
        title,
        genre,
        token_count,
        resource_url,
        publication,
        source,
    })
}

fn token_count(raw: Option<RawCount>) -> Result<u64, ValidationError> {
    const FIELD: &str = "token_count";
    let invalid = |shown: &dyn std::fmt::Display| {
        ValidationError::constraint(FIELD, format!("`{shown}` is not a non-negative integer"))
    };
    match raw {
        None => Err(ValidationError::missing(FIELD)),
        Some(RawCount::Number(n)) => u64::try_from(n).map_err(|_| invalid(&n)),
        Some(RawCount::Text(text)) => {
            let text = required(FIELD, Some(text))?;
            text.trim().parse::<u64>().map_err(|_| invalid(&text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RemFields {
        let mut value: Value = serde_json::from_str(json).unwrap();
        sanitize_placeholders(&mut value);
        serde_json::from_value(value).unwrap()
    }

    const RECORD: &str = r#"{
        "id": "M321-G1",
        "title": "Wiener Genesis",
        "genre": "-",
        "token_count": "43210",
        "publication": {"idno": "NA", "date": ""},
        "source": {"msname": "-", "repo": "Wien, ÖNB", "idno": "Cod. 2721",
                   "census_link": null, "tpq": "1100", "taq": "1150"}
    }"#;

    #[test]
    fn placeholders_become_absent() {
        let record = validate(parse(RECORD)).unwrap();
        assert_eq!(record.genre(), None);
        assert_eq!(record.publication(), &Publication::default());
        assert_eq!(record.source().msname(), None);
        assert_eq!(record.source().tpq(), Some("1100"));
        assert_eq!(record.token_count(), 43210);
        assert_eq!(
            record.resource_url(),
            "https://www.linguistics.rub.de/rem/corpus/details.html#M321-G1"
        );
    }

    #[test]
    fn token_count_accepts_numbers() {
        let fields = RemFields {
            token_count: Some(RawCount::Number(12)),
            ..parse(RECORD)
        };
        assert_eq!(validate(fields).unwrap().token_count(), 12);
    }

    #[test]
    fn negative_or_garbled_token_counts_fail() {
        for raw in [RawCount::Number(-1), RawCount::Text("12k".into())] {
            let fields = RemFields {
                token_count: Some(raw),
                ..parse(RECORD)
            };
            assert_eq!(validate(fields).unwrap_err().field(), "token_count");
        }
    }

    #[test]
    fn source_repo_is_required() {
        let mut fields = parse(RECORD);
        if let Some(source) = fields.source.as_mut() {
            source.repo = None;
        }
        assert_eq!(validate(fields).unwrap_err().field(), "source.repo");
    }

    #[test]
    fn placeholder_repo_is_missing() {
        let json = RECORD.replace("Wien, ÖNB", "NA");
        assert_eq!(validate(parse(&json)).unwrap_err().field(), "source.repo");
    }
}
