use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Metadata about the paper that the markup itself does not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Publication {
    /// Replaces the document's own title in the page heading.
    pub title: Option<String>,
    pub authors: Vec<Author>,
    pub venue: Option<Venue>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub month: Option<String>,
    /// Link to the PDF version.
    pub pdf: Option<String>,
    /// Canonical citation for the "How to cite" block.
    pub citation: Option<CitationMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A bibtex record describing this paper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitationMeta {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub key: String,
    #[serde(default, deserialize_with = "field_map")]
    pub fields: BTreeMap<String, String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Accepts `year = 2019` as well as `year = "2019"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}

fn field_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}
