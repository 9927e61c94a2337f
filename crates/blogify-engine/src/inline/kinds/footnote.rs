use crate::inline::{FootnoteRegistry, commands::replace_command};

pub struct Footnote;

impl Footnote {
    pub const COMMAND: &'static str = "footnote";

    /// Superscript link from the text to footnote `id`.
    pub fn marker(id: usize) -> String {
        format!(
            "<sup class=\"footnote-ref\"><a href=\"#fn_{id}\" id=\"fnref_{id}\">{id}</a></sup>"
        )
    }
}

/// Step 2: moves each footnote body into the registry, leaving a marker.
///
/// Bodies are stored untransformed; nested footnotes inside them register
/// when the body itself is transformed.
pub fn extract(text: &str, footnotes: &mut FootnoteRegistry) -> String {
    replace_command(text, Footnote::COMMAND, |arg| {
        Footnote::marker(footnotes.push(arg.value.trim()))
    })
}
