use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    /// 1-based, counted over figures only.
    pub number: usize,
    pub caption: Option<String>,
    /// Image path from `\includegraphics`.
    pub graphics: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// 1-based, counted over tables only.
    pub number: usize,
    /// Cells of each row, raw markup.
    pub rows: Vec<Vec<String>>,
    pub caption: Option<String>,
    pub label: Option<String>,
}

/// Semantic node handed to the renderer; text fields are raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    Paragraph(String),
    Heading {
        /// HTML heading level, 2 to 4.
        level: u8,
        text: String,
        anchor: String,
        label: Option<String>,
    },
    Preformatted(String),
    Blockquote(String),
    UnorderedList { items: Vec<String> },
    OrderedList { items: Vec<String> },
    Figure(Figure),
    Table(Table),
    Acknowledgements(String),
}

/// Where a `\ref` points and what it prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRef {
    pub anchor: String,
    /// `\ref` text, e.g. `2`.
    pub short: String,
    /// `\autoref` text, e.g. `Figure 2`.
    pub long: String,
}

/// Label → cross-reference target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex(HashMap<String, CrossRef>);

impl LabelIndex {
    pub fn insert(&mut self, label: impl Into<String>, target: CrossRef) {
        self.0.insert(label.into(), target);
    }

    pub fn get(&self, label: &str) -> Option<&CrossRef> {
        self.0.get(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub nodes: Vec<DocumentNode>,
    pub labels: LabelIndex,
}
