//! Brace-group scanning shared by the line classifier and the structural
//! sub-parsers (figures, tables, inline bibliographies).
//!
//! All scanning is byte-based: every delimiter is ASCII, so a match can never
//! land inside a multi-byte character. A backslash escapes the byte after it.

/// The mandatory `{...}` argument of a command, as found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'a> {
    /// Text inside a `[...]` before the braces, if present.
    pub optional: Option<&'a str>,
    /// Text between the outer braces.
    pub value: &'a str,
    /// Byte index just past the closing brace.
    pub end: usize,
}

/// Returns the byte index just past the brace group opening at `open`.
///
/// Returns `None` if `open` is not a `{` or the group is never closed.
pub fn group_end(s: &str, open: usize) -> Option<usize> {
    let b = s.as_bytes();
    if b.get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    let mut i = open;
    while i < b.len() {
        match b[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Net number of braces a line leaves open, ignoring escaped braces and
/// anything after an unescaped `%`.
pub fn open_brace_depth(line: &str) -> isize {
    let b = line.as_bytes();
    let mut depth = 0isize;
    let mut i = 0usize;
    while i < b.len() {
        match b[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'%' => break,
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }
    depth
}

/// Parses an optional `*`, an optional `[...]` and the mandatory `{...}`
/// group of a command whose name ends at byte `at`.
pub fn argument_at(s: &str, at: usize) -> Option<Argument<'_>> {
    let b = s.as_bytes();
    let mut i = at;
    if b.get(i) == Some(&b'*') {
        i += 1;
    }
    while b.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    let mut optional = None;
    if b.get(i) == Some(&b'[') {
        let close = i + s[i..].find(']')?;
        optional = Some(&s[i + 1..close]);
        i = close + 1;
    }
    while b.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    let end = group_end(s, i)?;
    Some(Argument {
        optional,
        value: &s[i + 1..end - 1],
        end,
    })
}

/// Finds the first `\name{...}` in `s` and returns its argument.
///
/// `\name` must not be a prefix of a longer command (`\label` does not match
/// `\labelwidth`).
pub fn find_command_argument<'a>(s: &'a str, name: &str) -> Option<Argument<'a>> {
    let needle = format!("\\{name}");
    let mut from = 0usize;
    while let Some(pos) = s[from..].find(&needle) {
        let after = from + pos + needle.len();
        let continues_name = s[after..].starts_with(|c: char| c.is_ascii_alphabetic());
        if !continues_name && let Some(arg) = argument_at(s, after) {
            return Some(arg);
        }
        from = after;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_end_handles_nesting() {
        let s = "{a{b}c}d";
        assert_eq!(group_end(s, 0), Some(7));
    }

    #[test]
    fn group_end_ignores_escaped_braces() {
        let s = r"{a\}b}";
        assert_eq!(group_end(s, 0), Some(6));
    }

    #[test]
    fn group_end_unclosed() {
        assert_eq!(group_end("{abc", 0), None);
        assert_eq!(group_end("abc", 0), None);
    }

    #[test]
    fn open_depth_counts_unclosed_braces() {
        assert_eq!(open_brace_depth(r"\author{Max"), 1);
        assert_eq!(open_brace_depth(r"\title{Done}"), 0);
        assert_eq!(open_brace_depth(r"\foo{a % {"), 1);
        assert_eq!(open_brace_depth(r"\foo{a \{"), 1);
    }

    #[test]
    fn argument_with_star_and_optional() {
        let s = r"\section*[short]{Long title} rest";
        let arg = argument_at(s, "\\section".len()).unwrap();
        assert_eq!(arg.optional, Some("short"));
        assert_eq!(arg.value, "Long title");
        assert_eq!(&s[arg.end..], " rest");
    }

    #[test]
    fn find_skips_longer_command_names() {
        let s = r"\labelwidth{3em} \label{fig:a}";
        let arg = find_command_argument(s, "label").unwrap();
        assert_eq!(arg.value, "fig:a");
    }

    #[test]
    fn find_returns_none_when_absent() {
        assert!(find_command_argument("plain text", "caption").is_none());
    }
}
