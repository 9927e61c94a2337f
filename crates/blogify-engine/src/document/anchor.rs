use crate::inline::plain_text;

/// URL fragment for a heading.
///
/// Lower-cases, drops apostrophes, collapses every run of other
/// non-alphanumeric characters to one `-` and trims `-` from both ends.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c == '\'' || c == '’' {
            continue;
        }
        if c.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}

/// Slug of a heading written in markup.
pub fn heading_anchor(markup: &str) -> String {
    slug(&plain_text(markup))
}
