use crate::document::{DocumentNode, Figure, Table};
use crate::inline::{RenderContext, attr, plain_text, transform};

/// Renders body nodes in document order, one block per line.
pub fn render_body(nodes: &[DocumentNode], cx: &mut RenderContext<'_>) -> String {
    nodes
        .iter()
        .map(|node| render_node(node, cx))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(node: &DocumentNode, cx: &mut RenderContext<'_>) -> String {
    match node {
        DocumentNode::Paragraph(text) => format!("<p>{}</p>", transform(text, cx)),
        DocumentNode::Heading {
            level,
            text,
            anchor,
            ..
        } => format!(
            "<h{level} id=\"{}\">{}</h{level}>",
            attr(anchor),
            transform(text, cx)
        ),
        DocumentNode::Preformatted(text) => {
            format!("<pre>{}</pre>", html_escape::encode_text(text))
        }
        DocumentNode::Blockquote(text) => {
            format!("<blockquote>\n{}\n</blockquote>", transform(text, cx))
        }
        DocumentNode::UnorderedList { items } => render_list("ul", items, cx),
        DocumentNode::OrderedList { items } => render_list("ol", items, cx),
        DocumentNode::Figure(figure) => render_figure(figure, cx),
        DocumentNode::Table(table) => render_table(table, cx),
        DocumentNode::Acknowledgements(text) => {
            format!("<h4>Acknowledgements</h4>\n<p>{}</p>", transform(text, cx))
        }
    }
}

fn render_list(tag: &str, items: &[String], cx: &mut RenderContext<'_>) -> String {
    let mut out = format!("<{tag}>\n");
    for item in items {
        out.push_str(&format!("<li>{}</li>\n", transform(item, cx)));
    }
    out.push_str(&format!("</{tag}>"));
    out
}

fn id_attr(label: Option<&String>) -> String {
    label
        .map(|label| format!(" id=\"{}\"", attr(label)))
        .unwrap_or_default()
}

fn caption(
    prefix: &str,
    number: usize,
    text: Option<&String>,
    cx: &mut RenderContext<'_>,
) -> String {
    match text {
        Some(text) => format!(
            "<p class=\"caption\">{prefix} {number}: {}</p>",
            transform(text, cx)
        ),
        None => format!("<p class=\"caption\">{prefix} {number}</p>"),
    }
}

fn render_figure(figure: &Figure, cx: &mut RenderContext<'_>) -> String {
    let mut out = format!("<div class=\"figure\"{}>\n", id_attr(figure.label.as_ref()));
    if let Some(src) = &figure.graphics {
        let alt = figure
            .caption
            .as_deref()
            .map(plain_text)
            .unwrap_or_default();
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            attr(src),
            attr(&alt)
        ));
    }
    out.push_str(&caption("Figure", figure.number, figure.caption.as_ref(), cx));
    out.push_str("\n</div>");
    out
}

fn render_table(table: &Table, cx: &mut RenderContext<'_>) -> String {
    let mut out = format!("<div class=\"table\"{}>\n", id_attr(table.label.as_ref()));
    out.push_str(&caption("Table", table.number, table.caption.as_ref(), cx));
    out.push_str("\n<table>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", transform(cell, cx)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LabelIndex;
    use pretty_assertions::assert_eq;

    fn render(nodes: &[DocumentNode]) -> String {
        let labels = LabelIndex::default();
        let mut cx = RenderContext::new(&labels);
        render_body(nodes, &mut cx)
    }

    #[test]
    fn heading_carries_anchor() {
        let html = render(&[DocumentNode::Heading {
            level: 2,
            text: "Results".to_string(),
            anchor: "results".to_string(),
            label: None,
        }]);
        insta::assert_snapshot!(html, @r#"<h2 id="results">Results</h2>"#);
    }

    #[test]
    fn preformatted_is_only_escaped() {
        let html = render(&[DocumentNode::Preformatted(r"a < \emph{b}".to_string())]);
        assert_eq!(html, r"<pre>a &lt; \emph{b}</pre>");
    }

    #[test]
    fn list_items_in_order() {
        let html = render(&[DocumentNode::UnorderedList {
            items: vec!["one".to_string(), r"\textbf{two}".to_string()],
        }]);
        assert_eq!(html, "<ul>\n<li>one</li>\n<li><strong>two</strong></li>\n</ul>");
    }

    #[test]
    fn figure_with_label_and_caption() {
        let html = render(&[DocumentNode::Figure(Figure {
            number: 2,
            caption: Some(r"The \emph{loop}".to_string()),
            graphics: Some("figs/loop.png".to_string()),
            label: Some("fig:loop".to_string()),
        })]);
        assert_eq!(
            html,
            "<div class=\"figure\" id=\"fig:loop\">\n\
             <img src=\"figs/loop.png\" alt=\"The loop\">\n\
             <p class=\"caption\">Figure 2: The <em>loop</em></p>\n\
             </div>"
        );
    }

    #[test]
    fn table_without_label() {
        let html = render(&[DocumentNode::Table(Table {
            number: 1,
            rows: vec![vec!["a".to_string(), "b".to_string()]],
            caption: None,
            label: None,
        })]);
        assert_eq!(
            html,
            "<div class=\"table\">\n<p class=\"caption\">Table 1</p>\n<table>\n\
             <tr><td>a</td><td>b</td></tr>\n</table>\n</div>"
        );
    }

    #[test]
    fn acknowledgements_heading() {
        let html = render(&[DocumentNode::Acknowledgements("Thanks.".to_string())]);
        assert_eq!(html, "<h4>Acknowledgements</h4>\n<p>Thanks.</p>");
    }
}
