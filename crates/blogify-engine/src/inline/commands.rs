//! Brace-aware rewriting of `\name[opt]{arg}` commands.
//!
//! Arguments are matched by brace depth, so `\emph{see \cite{x}}` yields the
//! whole `see \cite{x}` rather than stopping at the first `}`.

use crate::parsing::source::{Argument, argument_at, group_end};

/// Replaces every `\name` invocation in `text` with `render(argument)`.
///
/// An occurrence whose name continues with a letter (`\emphasis` for `\emph`)
/// or whose argument is never closed is left untouched.
pub fn replace_command(
    text: &str,
    name: &str,
    mut render: impl FnMut(Argument<'_>) -> String,
) -> String {
    rewrite(text, name, |after| {
        let arg = argument_at(text, after)?;
        Some((arg.end, render(arg)))
    })
}

/// Like [`replace_command`] for commands taking two groups, `\name{a}{b}`.
pub fn replace_command_pair(
    text: &str,
    name: &str,
    mut render: impl FnMut(Argument<'_>, Argument<'_>) -> String,
) -> String {
    rewrite(text, name, |after| {
        let first = argument_at(text, after)?;
        let second = group_at(text, first.end)?;
        Some((second.end, render(first, second)))
    })
}

/// The `{...}` group starting at byte `at` (after optional whitespace).
pub fn group_at(text: &str, at: usize) -> Option<Argument<'_>> {
    let start = at + text[at..].len() - text[at..].trim_start().len();
    let end = group_end(text, start)?;
    Some(Argument {
        optional: None,
        value: &text[start + 1..end - 1],
        end,
    })
}

/// Scans for `\name`; `invocation` gets the byte index after the name and
/// returns where the invocation ends and what replaces it.
fn rewrite(
    text: &str,
    name: &str,
    mut invocation: impl FnMut(usize) -> Option<(usize, String)>,
) -> String {
    let needle = format!("\\{name}");
    let mut out = String::with_capacity(text.len());
    let mut copied = 0usize;
    let mut from = 0usize;

    while let Some(pos) = text[from..].find(&needle) {
        let start = from + pos;
        let after = start + needle.len();
        from = after;
        if text[after..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }
        let Some((end, replacement)) = invocation(after) else {
            continue;
        };
        out.push_str(&text[copied..start]);
        out.push_str(&replacement);
        copied = end;
        from = end;
    }

    out.push_str(&text[copied..]);
    out
}
