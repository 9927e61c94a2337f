use log::warn;

use crate::bibliography::{Bibliography, BibliographyEntry, FileEntry};
use crate::inline::{RenderContext, attr, transform, transform_markup};
use crate::models::CitationMeta;

use super::scholar_url;

/// Fields tried in order for the venue of a file-sourced reference.
const VENUE_FIELDS: [&str; 5] = ["booktitle", "journal", "howpublished", "publisher", "school"];

/// Leading fields of the "How to cite" record; the rest follow alphabetically.
const CITE_FIELD_ORDER: [&str; 11] = [
    "title",
    "author",
    "editor",
    "booktitle",
    "journal",
    "volume",
    "number",
    "pages",
    "publisher",
    "year",
    "month",
];

/// Footnote list in id order, or an empty string when there are none.
///
/// A footnote body can add footnotes of its own; those are rendered too.
pub fn render_footnotes(cx: &mut RenderContext<'_>) -> String {
    if cx.footnotes.is_empty() {
        return String::new();
    }
    let mut items = Vec::new();
    let mut id = 1;
    while let Some(body) = cx.footnotes.get(id).map(str::to_string) {
        let html = transform_markup(&body, cx);
        items.push(format!(
            "<li id=\"fn_{id}\">{html} <a href=\"#fnref_{id}\">↩</a></li>"
        ));
        id += 1;
    }
    format!(
        "<h2>Footnotes</h2>\n<ol class=\"footnotes\">\n{}\n</ol>",
        items.join("\n")
    )
}

/// References section listing every cited key in id order, or an empty
/// string when nothing was cited.
pub fn render_references(bibliography: &Bibliography, cx: &mut RenderContext<'_>) -> String {
    if cx.citations.is_empty() {
        return String::new();
    }
    let mut entries = Vec::new();
    let mut id = 1;
    while let Some(key) = cx.citations.key(id).map(str::to_string) {
        let body = match bibliography.get(&key) {
            Some(BibliographyEntry::File(entry)) => file_reference(entry),
            Some(BibliographyEntry::Inline(entry)) => transform(&entry.text, cx),
            None => {
                warn!("no bibliography entry for citation `{key}`");
                String::new()
            }
        };
        let line = format!("[{id}] {body}");
        entries.push(format!(
            "<p class=\"ref\" id=\"ref_{}\">{}</p>",
            attr(&key),
            line.trim_end()
        ));
        id += 1;
    }
    format!("<h2>References</h2>\n{}", entries.join("\n"))
}

/// `Authors. Year. <a>Title</a>. <em>Venue</em>.` with absent parts left out.
fn file_reference(entry: &FileEntry) -> String {
    let mut parts = Vec::new();
    if !entry.authors.is_empty() {
        parts.push(escape(&entry.authors.join(", ")));
    }
    if let Some(year) = entry.field("year") {
        parts.push(escape(year));
    }
    let href = entry
        .field("url")
        .map(str::to_string)
        .unwrap_or_else(|| scholar_url(&entry.search_query));
    let title = entry.field("title").unwrap_or(&entry.key);
    parts.push(format!("<a href=\"{}\">{}</a>", attr(&href), escape(title)));
    if let Some(venue) = VENUE_FIELDS.iter().find_map(|name| entry.field(name)) {
        parts.push(format!("<em>{}</em>", escape(venue)));
    }
    parts
        .into_iter()
        .map(|part| {
            if part.ends_with(['.', '?', '!']) {
                part
            } else {
                part + "."
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The "How to cite" heading and a preformatted bibtex record.
pub fn render_citation(meta: &CitationMeta) -> String {
    let mut fields: Vec<(&String, &String)> = CITE_FIELD_ORDER
        .iter()
        .filter_map(|name| meta.fields.get_key_value(*name))
        .collect();
    fields.extend(
        meta.fields
            .iter()
            .filter(|(name, _)| !CITE_FIELD_ORDER.contains(&name.as_str())),
    );
    let record = if fields.is_empty() {
        format!("@{}{{{}}}", meta.entry_type, meta.key)
    } else {
        let body = fields
            .iter()
            .map(|(name, value)| format!("  {name}={{{value}}}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("@{}{{{},\n{body}\n}}", meta.entry_type, meta.key)
    };
    format!(
        "<h2 id=\"cite\">How to cite this work</h2>\n<pre>\n{}\n</pre>",
        escape(&record)
    )
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
