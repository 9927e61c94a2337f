//! # Rendering
//!
//! Turns a built [`Document`] into one HTML page.
//!
//! Every text-bearing node is transformed exactly once, front to back, so
//! citation and footnote ids follow reading order:
//!
//! 1. page title
//! 2. body nodes
//! 3. footnote bodies (may cite keys the body never cites)
//! 4. document-sourced reference entries
//!
//! ## Modules
//!
//! - **`body`**: headings, paragraphs, lists, figures and tables
//! - **`references`**: References, Footnotes and the "How to cite" record
//! - **`page`**: head, stylesheet, author and info lines

pub mod body;
pub mod page;
pub mod references;

use log::info;

use crate::bibliography::Bibliography;
use crate::document::Document;
use crate::inline::{RenderContext, plain_text, transform};
use crate::models::Publication;

pub use page::PageTitle;

const SCHOLAR_SEARCH: &str = "https://scholar.google.com/scholar?q=";

/// Google Scholar search link for `query`.
pub fn scholar_url(query: &str) -> String {
    format!("{SCHOLAR_SEARCH}{}", urlencoding::encode(query))
}

pub struct Renderer<'a> {
    document: &'a Document,
    bibliography: &'a Bibliography,
    publication: &'a Publication,
}

impl<'a> Renderer<'a> {
    pub fn new(
        document: &'a Document,
        bibliography: &'a Bibliography,
        publication: &'a Publication,
    ) -> Self {
        Self {
            document,
            bibliography,
            publication,
        }
    }

    pub fn render_page(&self) -> String {
        let mut cx = RenderContext::new(&self.document.labels);
        let title = self.title(&mut cx);
        let body = body::render_body(&self.document.nodes, &mut cx);
        let footnotes = references::render_footnotes(&mut cx);
        let references = references::render_references(self.bibliography, &mut cx);
        let citation = self
            .publication
            .citation
            .as_ref()
            .map(references::render_citation)
            .unwrap_or_default();
        info!(
            "rendered {} nodes, {} citations, {} footnotes",
            self.document.nodes.len(),
            cx.citations.len(),
            cx.footnotes.len()
        );

        let content = [body, references, footnotes, citation]
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        page::assemble(title.as_ref(), self.publication, &content)
    }

    /// Metadata override, else `Title: Subtitle`, else whichever is present.
    fn title(&self, cx: &mut RenderContext<'_>) -> Option<PageTitle> {
        if let Some(title) = &self.publication.title {
            return Some(PageTitle {
                html: html_escape::encode_text(title).into_owned(),
                text: title.clone(),
            });
        }
        let markup = match (&self.document.title, &self.document.subtitle) {
            (Some(title), Some(subtitle)) => format!("{title}: {subtitle}"),
            (Some(title), None) => title.clone(),
            (None, Some(subtitle)) => subtitle.clone(),
            (None, None) => return None,
        };
        Some(PageTitle {
            html: transform(&markup, cx),
            text: plain_text(&markup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibliography::InlineEntry;
    use crate::document::DocumentNode;
    use pretty_assertions::assert_eq;

    fn document(nodes: Vec<DocumentNode>) -> Document {
        Document {
            title: Some("Retellings".to_string()),
            subtitle: Some(r"Evaluating \emph{AI} games".to_string()),
            nodes,
            ..Document::default()
        }
    }

    #[test]
    fn title_joins_subtitle() {
        let doc = document(vec![]);
        let page = Renderer::new(&doc, &Bibliography::new(), &Publication::default()).render_page();
        assert!(page.contains("<title>Retellings: Evaluating AI games</title>"));
        assert!(page.contains("<h1>Retellings: Evaluating <em>AI</em> games</h1>"));
    }

    #[test]
    fn page_title_folds_accents() {
        let doc = Document {
            title: Some(r"Caf\'e Games".to_string()),
            ..Document::default()
        };
        let page = Renderer::new(&doc, &Bibliography::new(), &Publication::default()).render_page();
        assert!(page.contains("<title>Café Games</title>"));
        assert!(page.contains("<h1>Café Games</h1>"));
    }

    #[test]
    fn metadata_title_wins() {
        let doc = document(vec![]);
        let publication = Publication {
            title: Some("A & B".to_string()),
            ..Publication::default()
        };
        let page = Renderer::new(&doc, &Bibliography::new(), &publication).render_page();
        assert!(page.contains("<h1>A &amp; B</h1>"));
    }

    #[test]
    fn citations_number_in_reading_order() {
        let doc = document(vec![
            DocumentNode::Paragraph(r"First\footnote{Aside \cite{late}.} then \cite{early}.".to_string()),
            DocumentNode::Paragraph(r"Again \cite{early}.".to_string()),
        ]);
        let mut bib = Bibliography::new();
        bib.insert(InlineEntry::new("early", "Early work."));
        bib.insert(InlineEntry::new("late", "Late work."));
        let page = Renderer::new(&doc, &bib, &Publication::default()).render_page();

        let early = page.find("id=\"ref_early\">[1] Early work.").unwrap();
        let late = page.find("id=\"ref_late\">[2] Late work.").unwrap();
        assert!(early < late);
        assert!(page.contains("<p>Again [<a href=\"#ref_early\">1</a>].</p>"));
        let references = page.find("<h2>References</h2>").unwrap();
        let footnotes = page.find("<h2>Footnotes</h2>").unwrap();
        assert!(references < footnotes);
    }

    #[test]
    fn no_citations_no_references_section() {
        let doc = document(vec![DocumentNode::Paragraph("Plain.".to_string())]);
        let page = Renderer::new(&doc, &Bibliography::new(), &Publication::default()).render_page();
        assert!(!page.contains("References"));
        assert!(!page.contains("Footnotes"));
        assert!(!page.contains("id=\"cite\""));
        assert_eq!(page.matches("<p>Plain.</p>").count(), 1);
    }

    #[test]
    fn scholar_url_encodes_query() {
        assert_eq!(
            scholar_url("\"A B\" C"),
            "https://scholar.google.com/scholar?q=%22A%20B%22%20C"
        );
    }
}
