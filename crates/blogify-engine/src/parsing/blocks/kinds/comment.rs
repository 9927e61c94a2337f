/// The `%` line comment.
pub struct CommentMarker;

impl CommentMarker {
    pub const MARKER: u8 = b'%';

    /// Byte index of the first unescaped `%`, if any.
    ///
    /// A `%` preceded by an odd run of backslashes is escaped (`\%`); an even
    /// run (`\\%`) is a line break followed by a comment.
    pub fn find(line: &str) -> Option<usize> {
        let b = line.as_bytes();
        let mut backslashes = 0usize;
        for (i, &c) in b.iter().enumerate() {
            if c == b'\\' {
                backslashes += 1;
                continue;
            }
            if c == Self::MARKER && backslashes % 2 == 0 {
                return Some(i);
            }
            backslashes = 0;
        }
        None
    }

    /// Text before the first unescaped `%`, or the whole line.
    pub fn strip(line: &str) -> &str {
        match Self::find(line) {
            Some(at) => &line[..at],
            None => line,
        }
    }

    /// True when the line has a comment and nothing but whitespace before it.
    pub fn is_comment_only(line: &str) -> bool {
        Self::find(line).is_some() && Self::strip(line).trim().is_empty()
    }
}
