use log::debug;

use crate::{
    bibliography::Bibliography,
    inline::plain_text,
    parsing::{
        blocks::{BlockKind, RawNode, kinds::Environment},
        source::find_command_argument,
    },
};

use super::{
    anchor::heading_anchor,
    kinds::{BibItem, FigureBody, ListItem, TableBody},
    types::{CrossRef, Document, DocumentNode},
};

/// Groups text into paragraphs and maps raw blocks to semantic nodes.
///
/// Inline bibliography entries go straight into the shared bibliography.
pub struct DocumentBuilder<'b> {
    bibliography: &'b mut Bibliography,
    doc: Document,
    paragraph: Vec<String>,
    figures: usize,
    tables: usize,
    /// Index of a just-emitted heading a following `\label` may name.
    label_target: Option<usize>,
}

impl<'b> DocumentBuilder<'b> {
    pub fn new(bibliography: &'b mut Bibliography) -> Self {
        Self {
            bibliography,
            doc: Document::default(),
            paragraph: vec![],
            figures: 0,
            tables: 0,
            label_target: None,
        }
    }

    pub fn push(&mut self, node: RawNode) {
        let label_target = self.label_target.take();
        if !matches!(node, RawNode::Text(_)) {
            self.flush_paragraph();
        }

        match node {
            RawNode::Text(text) => self.paragraph.push(text),
            RawNode::Empty => {}
            RawNode::Title(title) => self.doc.title = Some(title),
            RawNode::Subtitle(subtitle) => self.doc.subtitle = Some(subtitle),
            RawNode::SectionHeader { depth, text, label } => self.push_heading(depth, text, label),
            RawNode::MultilineBlock { kind, lines } => self.push_block(kind, lines),
            RawNode::OneLineCommand(command) => match label_target {
                Some(index) => self.label_heading(index, &command),
                None => debug!("command dropped: {command}"),
            },
        }
    }

    pub fn finish(mut self) -> Document {
        // EOF flush
        self.flush_paragraph();
        self.doc
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join("\n");
        self.doc.nodes.push(DocumentNode::Paragraph(text));
    }

    fn push_heading(&mut self, depth: u8, text: String, label: Option<String>) {
        let anchor = heading_anchor(&text);
        if let Some(label) = &label {
            self.register_heading(label, &text, &anchor);
        }
        self.label_target = label.is_none().then_some(self.doc.nodes.len());
        self.doc.nodes.push(DocumentNode::Heading {
            level: depth + 1,
            text,
            anchor,
            label,
        });
    }

    /// `\label{...}` on the line after a heading names that heading.
    fn label_heading(&mut self, index: usize, command: &str) {
        if !command.starts_with("\\label") {
            debug!("command dropped: {command}");
            return;
        }
        let Some(arg) = find_command_argument(command, "label") else {
            return;
        };
        let new_label = arg.value.trim().to_string();
        let Some(DocumentNode::Heading {
            text,
            anchor,
            label,
            ..
        }) = self.doc.nodes.get_mut(index)
        else {
            return;
        };
        *label = Some(new_label.clone());
        let (text, anchor) = (text.clone(), anchor.clone());
        self.register_heading(&new_label, &text, &anchor);
    }

    fn register_heading(&mut self, label: &str, text: &str, anchor: &str) {
        let name = plain_text(text);
        self.doc.labels.insert(
            label,
            CrossRef {
                anchor: anchor.to_string(),
                short: name.clone(),
                long: name,
            },
        );
    }

    fn push_block(&mut self, kind: BlockKind, lines: Vec<String>) {
        let env = match kind {
            BlockKind::Environment { env, .. } => env,
            BlockKind::Command { name } => {
                debug!("\\{name} block dropped");
                return;
            }
        };
        let node = match env {
            Environment::Verbatim => DocumentNode::Preformatted(lines.join("\n")),
            Environment::Quotation | Environment::Quote => {
                DocumentNode::Blockquote(lines.join("\n"))
            }
            Environment::Itemize => DocumentNode::UnorderedList {
                items: ListItem::parse(&lines),
            },
            Environment::Enumerate => DocumentNode::OrderedList {
                items: ListItem::parse(&lines),
            },
            Environment::Figure => {
                self.figures += 1;
                let figure = FigureBody::parse(&lines, self.figures);
                if let Some(label) = &figure.label {
                    self.register_numbered(label, "Figure", figure.number);
                }
                DocumentNode::Figure(figure)
            }
            Environment::Table => {
                self.tables += 1;
                let table = TableBody::parse(&lines, self.tables);
                if let Some(label) = &table.label {
                    self.register_numbered(label, "Table", table.number);
                }
                DocumentNode::Table(table)
            }
            Environment::Acks => DocumentNode::Acknowledgements(lines.join("\n")),
            Environment::CcsXml => {
                debug!("CCSXML block dropped");
                return;
            }
            Environment::Bibliography => {
                for entry in BibItem::parse(&lines) {
                    self.bibliography.insert(entry);
                }
                return;
            }
        };
        self.doc.nodes.push(node);
    }

    fn register_numbered(&mut self, label: &str, kind: &str, number: usize) {
        self.doc.labels.insert(
            label,
            CrossRef {
                anchor: label.to_string(),
                short: number.to_string(),
                long: format!("{kind} {number}"),
            },
        );
    }
}

/// Builds the document from raw nodes, merging inline bibliography entries
/// into `bibliography`.
pub fn build_document(nodes: Vec<RawNode>, bibliography: &mut Bibliography) -> Document {
    let mut builder = DocumentBuilder::new(bibliography);
    for node in nodes {
        builder.push(node);
    }
    builder.finish()
}
