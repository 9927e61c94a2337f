use log::warn;

use crate::{
    bibliography::InlineEntry,
    parsing::{blocks::kinds::CommentMarker, source::argument_at},
};

/// `\bibitem` entries of a `thebibliography` body.
pub struct BibItem;

impl BibItem {
    pub const MARKER: &'static str = "\\bibitem";
    pub const NEWBLOCK: &'static str = "\\newblock";

    /// One entry per `\bibitem[label]{key}`; its text runs until a blank line
    /// or the next item. An item without a readable key is skipped.
    pub fn parse(lines: &[String]) -> Vec<InlineEntry> {
        let mut entries = vec![];
        let mut current: Option<(String, Vec<String>)> = None;

        for line in lines {
            let line = CommentMarker::strip(line).trim();
            if let Some(rest) = line.strip_prefix(Self::MARKER) {
                entries.extend(current.take().map(Self::finish));
                match argument_at(line, Self::MARKER.len()) {
                    Some(key) => {
                        let text = line[key.end..].trim();
                        let text = if text.is_empty() { vec![] } else { vec![text.to_string()] };
                        current = Some((key.value.trim().to_string(), text));
                    }
                    None => warn!("skipping \\bibitem without a key: {rest}"),
                }
            } else if line.is_empty() {
                entries.extend(current.take().map(Self::finish));
            } else if let Some((_, text)) = current.as_mut() {
                text.push(line.to_string());
            }
        }
        entries.extend(current.map(Self::finish));
        entries
    }

    fn finish((key, text): (String, Vec<String>)) -> InlineEntry {
        let text = text
            .join("\n")
            .replace(Self::NEWBLOCK, "")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        InlineEntry::new(key, text)
    }
}
