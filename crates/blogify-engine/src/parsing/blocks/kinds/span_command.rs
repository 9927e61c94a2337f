/// Commands that may start an ordinary text line.
///
/// A line opening with any other `\name` is a one-line command and carries no
/// body text.
pub struct SpanCommand;

impl SpanCommand {
    pub const NAMES: [&'static str; 31] = [
        "cite", "citep", "citet", "emph", "textbf", "textit", "textsl", "texttt", "textsc", "url",
        "href", "ref", "autoref", "cref", "Cref", "footnote", "mbox", "nowrap", "ldots", "dots",
        "textellipsis", "aa", "AA", "ss", "ae", "AE", "oe", "OE", "o", "O", "c",
    ];

    /// Single-character escapes that produce text: accents and escaped specials.
    const SYMBOLS: &'static str = "'\"`^~%&$#_{}";

    /// True if `line` starts with one of [`SpanCommand::NAMES`] or a
    /// single-character text escape such as `\"o` or `\%`.
    ///
    /// The name must end at a non-letter, so `\emphasis` is not `\emph`.
    pub fn starts(line: &str) -> bool {
        let Some(rest) = line.strip_prefix('\\') else {
            return false;
        };
        if rest.starts_with(|c: char| Self::SYMBOLS.contains(c)) {
            return true;
        }
        let name_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        Self::NAMES.contains(&&rest[..name_len])
    }
}
