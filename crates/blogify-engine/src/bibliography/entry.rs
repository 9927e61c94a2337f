use std::collections::BTreeMap;

/// A record parsed from a `.bib` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub key: String,
    /// Entry type, lower-cased (`inproceedings`, `article`, ...).
    pub kind: String,
    /// Cleaned field values keyed by lower-cased field name.
    pub fields: BTreeMap<String, String>,
    /// Author names in "First Last" order.
    pub authors: Vec<String>,
    /// Scholar search: the quoted title followed by the first author.
    pub search_query: String,
}

impl FileEntry {
    pub fn new(
        kind: impl Into<String>,
        key: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        let authors = fields
            .get("author")
            .map(|line| parse_authors(line))
            .unwrap_or_default();
        let title = fields.get("title").map(String::as_str).unwrap_or_default();
        let first_author = authors.first().map(String::as_str).unwrap_or_default();
        let search_query = format!("\"{title}\" {first_author}").trim_end().to_string();
        Self {
            key: key.into(),
            kind: kind.into(),
            fields,
            authors,
            search_query,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A `\bibitem` written in the document itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEntry {
    pub key: String,
    /// Raw markup text of the item.
    pub text: String,
}

impl InlineEntry {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibliographyEntry {
    /// Loaded from a bibliography file.
    File(FileEntry),
    /// Defined in the document body.
    Inline(InlineEntry),
}

impl BibliographyEntry {
    pub fn key(&self) -> &str {
        match self {
            BibliographyEntry::File(e) => &e.key,
            BibliographyEntry::Inline(e) => &e.key,
        }
    }
}

impl From<FileEntry> for BibliographyEntry {
    fn from(entry: FileEntry) -> Self {
        BibliographyEntry::File(entry)
    }
}

impl From<InlineEntry> for BibliographyEntry {
    fn from(entry: InlineEntry) -> Self {
        BibliographyEntry::Inline(entry)
    }
}

/// Splits an author field on ` and `, turning "Last, First" into "First Last".
pub fn parse_authors(line: &str) -> Vec<String> {
    line.split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| match name.split_once(',') {
            Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
            None => name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Kreminski, Max and Noah Wardrip-Fruin", &["Max Kreminski", "Noah Wardrip-Fruin"])]
    #[case("Samuel, Ben", &["Ben Samuel"])]
    #[case("", &[])]
    fn normalises_author_names(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_authors(line), expected);
    }

    #[test]
    fn derives_search_query() {
        let fields = BTreeMap::from([
            ("title".to_string(), "Talk of the Town".to_string()),
            ("author".to_string(), "Ryan, James and Mateas, Michael".to_string()),
        ]);
        let entry = FileEntry::new("inproceedings", "ryan2015", fields);
        assert_eq!(entry.authors, vec!["James Ryan", "Michael Mateas"]);
        assert_eq!(entry.search_query, "\"Talk of the Town\" James Ryan");
    }

    #[test]
    fn search_query_without_author() {
        let fields = BTreeMap::from([("title".to_string(), "Anon".to_string())]);
        let entry = FileEntry::new("misc", "anon", fields);
        assert!(entry.authors.is_empty());
        assert_eq!(entry.search_query, "\"Anon\"");
    }
}
