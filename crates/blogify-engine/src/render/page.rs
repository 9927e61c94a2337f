use crate::inline::attr;
use crate::models::Publication;

use super::scholar_url;

const STYLESHEET: &str = r#"  <style>
  body {
    font-family: Georgia, serif;
    line-height: 1.5;
    margin: 2rem auto;
    max-width: 700px;
    padding: 0 1rem;
  }
  h1, h2, h3 {
    line-height: 1.25;
  }
  pre {
    background: #eee;
    padding: 0.5rem;
    -webkit-user-select: all;
    user-select: all;
    white-space: pre-wrap;
  }
  img {
    max-width: 100%;
  }
  table {
    border-collapse: collapse;
    margin: 0 auto;
  }
  td {
    padding: 0.25rem 0.5rem;
  }
  .caption {
    font-style: italic;
    text-align: center;
  }
  .caption em {
    font-style: normal;
  }
  .nowrap {
    white-space: nowrap;
  }
  .smallcaps {
    font-variant: small-caps;
  }
  .ref {
    padding-left: 2rem;
    text-indent: -2rem;
  }
  </style>
"#;

/// The page title in both forms it is needed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    /// H1 content.
    pub html: String,
    /// Plain text for `<title>`, metadata tags and the Scholar query.
    pub text: String,
}

/// Wraps rendered content in the full page: head, H1, author and info lines.
pub fn assemble(title: Option<&PageTitle>, publication: &Publication, content: &str) -> String {
    let text = title.map(|t| t.text.as_str()).unwrap_or_default();
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    out.push_str(&format!(
        "  <title>{}</title>\n",
        html_escape::encode_text(text)
    ));
    for (name, content) in scholar_meta(text, publication) {
        out.push_str(&format!(
            "  <meta name=\"{name}\" content=\"{}\">\n",
            attr(&content)
        ));
    }
    out.push_str(STYLESHEET);
    out.push_str("</head>\n<body>\n");
    if let Some(title) = title {
        out.push_str(&format!("<h1>{}</h1>\n", title.html));
    }
    if let Some(authors) = author_line(publication) {
        out.push_str(&authors);
        out.push('\n');
    }
    if let Some(info) = info_line(text, publication) {
        out.push_str(&info);
        out.push('\n');
    }
    out.push_str(content);
    out.push_str("\n</body>\n</html>\n");
    out
}

/// Tags read by Google Scholar's indexer.
fn scholar_meta(title: &str, publication: &Publication) -> Vec<(&'static str, String)> {
    let mut tags = Vec::new();
    if !title.is_empty() {
        tags.push(("citation_title", title.to_string()));
    }
    for author in &publication.authors {
        tags.push(("citation_author", author.name.clone()));
    }
    if let Some(year) = &publication.year {
        let date = match &publication.month {
            Some(month) => format!("{year}/{month}"),
            None => year.clone(),
        };
        tags.push(("citation_publication_date", date));
    }
    if let Some(venue) = &publication.venue {
        tags.push(("citation_conference_title", venue.name.clone()));
    }
    if let Some(pdf) = &publication.pdf {
        tags.push(("citation_pdf_url", pdf.clone()));
    }
    tags
}

fn link(href: Option<&str>, text: &str) -> String {
    let text = html_escape::encode_text(text);
    match href {
        Some(href) => format!("<a href=\"{}\">{text}</a>", attr(href)),
        None => text.into_owned(),
    }
}

fn author_line(publication: &Publication) -> Option<String> {
    if publication.authors.is_empty() {
        return None;
    }
    let names: Vec<String> = publication
        .authors
        .iter()
        .map(|author| link(author.link.as_deref(), &author.name))
        .collect();
    Some(format!("<div class=\"authors\">{}</div>", names.join(", ")))
}

/// "Presented at VENUE • How to cite • Google Scholar • PDF", keeping only
/// the parts with data behind them.
fn info_line(title: &str, publication: &Publication) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(venue) = &publication.venue {
        parts.push(format!(
            "Presented at {}",
            link(venue.link.as_deref(), &venue.name)
        ));
    }
    if publication.citation.is_some() {
        parts.push("<a href=\"#cite\">How to cite</a>".to_string());
    }
    if !title.is_empty() {
        let first_author = publication
            .authors
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or_default();
        let query = format!("\"{title}\" {first_author}");
        let href = scholar_url(query.trim_end());
        parts.push(link(Some(href.as_str()), "Google Scholar"));
    }
    if let Some(pdf) = &publication.pdf {
        parts.push(link(Some(pdf.as_str()), "PDF"));
    }
    if parts.is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"pubinfo\">\n  {}\n</div>",
        parts.join(" •\n  ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Venue};
    use pretty_assertions::assert_eq;

    fn publication() -> Publication {
        Publication {
            authors: vec![
                Author {
                    name: "Max Kreminski".to_string(),
                    link: Some("https://mkremins.github.io".to_string()),
                },
                Author::new("Ben Samuel"),
            ],
            venue: Some(Venue {
                name: "AIIDE 2019".to_string(),
                link: None,
            }),
            year: Some("2019".to_string()),
            month: Some("10".to_string()),
            pdf: Some("paper.pdf".to_string()),
            ..Publication::default()
        }
    }

    #[test]
    fn author_line_links_when_known() {
        assert_eq!(
            author_line(&publication()).unwrap(),
            "<div class=\"authors\"><a href=\"https://mkremins.github.io\">Max Kreminski</a>, Ben Samuel</div>"
        );
        assert_eq!(author_line(&Publication::default()), None);
    }

    #[test]
    fn info_line_skips_missing_parts() {
        let info = info_line("Retellings", &publication()).unwrap();
        insta::assert_snapshot!(info, @r#"
        <div class="pubinfo">
          Presented at AIIDE 2019 •
          <a href="https://scholar.google.com/scholar?q=%22Retellings%22%20Max%20Kreminski">Google Scholar</a> •
          <a href="paper.pdf">PDF</a>
        </div>
        "#);
        assert_eq!(info_line("", &Publication::default()), None);
    }

    #[test]
    fn scholar_meta_tags() {
        let tags = scholar_meta("Retellings", &publication());
        assert_eq!(
            tags,
            vec![
                ("citation_title", "Retellings".to_string()),
                ("citation_author", "Max Kreminski".to_string()),
                ("citation_author", "Ben Samuel".to_string()),
                ("citation_publication_date", "2019/10".to_string()),
                ("citation_conference_title", "AIIDE 2019".to_string()),
                ("citation_pdf_url", "paper.pdf".to_string()),
            ]
        );
    }

    #[test]
    fn page_without_title_has_no_h1() {
        let page = assemble(None, &Publication::default(), "<p>x</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title></title>"));
        assert!(!page.contains("<h1>"));
        assert!(page.ends_with("<p>x</p>\n</body>\n</html>\n"));
    }
}
