use std::{collections::BTreeMap, sync::LazyLock};

use log::warn;
use regex::Regex;

use crate::{
    inline::kinds::typography::fold_accents,
    parsing::source::{lines_with_numbers, open_brace_depth},
};

use super::{BibError, FileEntry};

static ENTRY_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@\s*[A-Za-z]+\s*([{(])\s*([^,\s]*)\s*(,?)").unwrap());

/// Entry types that carry no citable record.
const SKIPPED_TYPES: [&str; 3] = ["comment", "string", "preamble"];

/// An entry whose closing line has not been read yet.
struct OpenEntry {
    kind: String,
    key: String,
    /// `}` or `)`, matching the delimiter after the entry type.
    close: char,
    fields: BTreeMap<String, String>,
    /// A field value whose braces are still open: name, raw text, depth.
    value: Option<(String, String, isize)>,
}

impl OpenEntry {
    fn add_field(&mut self, name: &str, raw: &str) {
        self.fields
            .insert(name.trim().to_lowercase(), clean_value(raw));
    }

    fn finish(mut self) -> FileEntry {
        if let Some((name, raw, _)) = self.value.take() {
            self.add_field(&name, &raw);
        }
        FileEntry::new(self.kind, self.key, self.fields)
    }
}

/// Parses `.bib` text into entries, in file order.
///
/// The format is read a line at a time: `@type{key,` opens an entry, a line
/// starting with the matching `}` closes it and `name = value` lines in
/// between add fields. `@type(key,` entries close on `)` instead.
/// A value may continue over several lines while its braces stay open.
pub fn parse_bibtex(text: &str) -> Result<Vec<FileEntry>, BibError> {
    let mut entries = vec![];
    let mut current: Option<OpenEntry> = None;
    let mut skip_depth: Option<isize> = None;

    for lr in lines_with_numbers(text) {
        let line = lr.text.trim();

        if let Some(depth) = skip_depth.as_mut() {
            *depth += open_brace_depth(line);
            if *depth <= 0 {
                skip_depth = None;
            }
            continue;
        }

        if let Some(entry) = current.as_mut()
            && let Some((name, mut raw, depth)) = entry.value.take()
        {
            raw.push(' ');
            raw.push_str(line);
            let depth = depth + open_brace_depth(line);
            if depth > 0 {
                entry.value = Some((name, raw, depth));
            } else {
                entry.add_field(&name, &raw);
            }
            continue;
        }

        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if line.starts_with('@') {
            if let Some(open) = current.take() {
                warn!("bibliography entry `{}` is not closed before line {}", open.key, lr.number);
                entries.push(open.finish());
            }
            let kind: String = line[1..]
                .trim_start()
                .chars()
                .take_while(char::is_ascii_alphabetic)
                .collect::<String>()
                .to_lowercase();
            if SKIPPED_TYPES.contains(&kind.as_str()) {
                let depth = open_brace_depth(line);
                if depth > 0 {
                    skip_depth = Some(depth);
                }
                continue;
            }
            let (key, close) = ENTRY_HEADER_RE
                .captures(line)
                .filter(|caps| !caps[2].is_empty() && !caps[3].is_empty())
                .map(|caps| {
                    let close = if &caps[1] == "(" { ')' } else { '}' };
                    (caps[2].to_string(), close)
                })
                .ok_or_else(|| BibError::Malformed {
                    line: lr.number,
                    text: line.to_string(),
                })?;
            current = Some(OpenEntry {
                kind,
                key,
                close,
                fields: BTreeMap::new(),
                value: None,
            });
            continue;
        }

        if current.as_ref().is_some_and(|open| line.starts_with(open.close)) {
            if let Some(open) = current.take() {
                entries.push(open.finish());
            }
            continue;
        }
        if line.starts_with(['}', ')']) {
            continue;
        }

        // Anything outside an entry is a comment.
        let Some(entry) = current.as_mut() else {
            continue;
        };
        let (name, value) = line.split_once('=').ok_or_else(|| BibError::Malformed {
            line: lr.number,
            text: line.to_string(),
        })?;
        let depth = open_brace_depth(value);
        if depth > 0 {
            entry.value = Some((name.to_string(), value.to_string(), depth));
        } else {
            entry.add_field(name, value);
        }
    }

    if let Some(open) = current {
        warn!("bibliography entry `{}` is not closed at end of input", open.key);
        entries.push(open.finish());
    }
    Ok(entries)
}

/// Cleans a raw field value: trailing comma, one pair of outer braces or
/// quotes, accent escapes, then inner braces and remaining backslashes.
pub fn clean_value(raw: &str) -> String {
    let v = raw.trim();
    let v = v.strip_suffix(',').unwrap_or(v).trim();
    let v = strip_outer(v, '{', '}')
        .or_else(|| strip_outer(v, '"', '"'))
        .unwrap_or(v);
    fold_accents(v)
        .replace(['{', '}', '\\'], "")
        .trim()
        .to_string()
}

fn strip_outer(v: &str, open: char, close: char) -> Option<&str> {
    v.strip_prefix(open)?.strip_suffix(close)
}
