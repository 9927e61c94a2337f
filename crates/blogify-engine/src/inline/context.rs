use crate::document::LabelIndex;

use super::{CitationRegistry, FootnoteRegistry};

/// State threaded through every inline transformation of one render.
///
/// The registries are written in traversal order, so the renderer must
/// transform each text exactly once, front to back.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub citations: CitationRegistry,
    pub footnotes: FootnoteRegistry,
    pub labels: &'a LabelIndex,
}

impl<'a> RenderContext<'a> {
    pub fn new(labels: &'a LabelIndex) -> Self {
        Self {
            citations: CitationRegistry::default(),
            footnotes: FootnoteRegistry::default(),
            labels,
        }
    }
}
