/// A reference to a single source line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number in the flattened markup.
    pub number: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Returns true if the line holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns an iterator over the lines of `markup` with their line numbers.
pub fn lines_with_numbers(markup: &str) -> impl Iterator<Item = LineRef<'_>> {
    markup.lines().enumerate().map(|(i, text)| LineRef {
        number: i + 1,
        text,
    })
}
