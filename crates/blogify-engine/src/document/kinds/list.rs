use log::debug;

use crate::parsing::blocks::kinds::CommentMarker;

/// Items of an `itemize` or `enumerate` body.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "\\item";

    /// Splits a list body into item texts with their `\item` removed.
    ///
    /// Lines that do not start an item continue the current one. An
    /// `\item[term] text` becomes `\textbf{term} text`.
    pub fn parse(lines: &[String]) -> Vec<String> {
        let mut items: Vec<String> = vec![];
        for line in lines {
            let line = CommentMarker::strip(line).trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = Self::strip_marker(line) {
                items.push(Self::item_text(rest));
            } else if let Some(item) = items.last_mut() {
                item.push('\n');
                item.push_str(line);
            } else {
                debug!("list line before the first item dropped: {line}");
            }
        }
        items
    }

    fn strip_marker(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKER)?;
        (!rest.starts_with(|c: char| c.is_ascii_alphabetic())).then_some(rest)
    }

    fn item_text(rest: &str) -> String {
        let rest = rest.trim_start();
        if let Some(term) = rest.strip_prefix('[')
            && let Some(close) = term.find(']')
        {
            let body = term[close + 1..].trim_start();
            return format!("\\textbf{{{}}} {body}", &term[..close]).trim_end().to_string();
        }
        rest.to_string()
    }
}
