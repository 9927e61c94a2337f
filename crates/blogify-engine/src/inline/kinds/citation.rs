use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::inline::{CitationRegistry, attr};

/// `\cite`, `\citep`, `\citet`, starred or not, with up to two optional
/// arguments; the last one present is the page range.
static CITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\cite[pt]?\*?(?:\[([^\]]*)\])?(?:\[([^\]]*)\])?\{([^}]*)\}").unwrap()
});

/// Step 3: replaces citation commands with bracketed links, assigning ids.
pub fn resolve(text: &str, citations: &mut CitationRegistry) -> String {
    CITE_RE
        .replace_all(text, |caps: &Captures| {
            let pages = caps
                .get(2)
                .or_else(|| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|p| !p.is_empty());
            let links: Vec<String> = caps[3]
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| {
                    let id = citations.cite(key);
                    let key = attr(key);
                    match pages {
                        Some(pages) => format!("<a href=\"#ref_{key}\">{id}</a>, {pages}"),
                        None => format!("<a href=\"#ref_{key}\">{id}</a>"),
                    }
                })
                .collect();
            format!("[{}]", links.join(", "))
        })
        .into_owned()
}
