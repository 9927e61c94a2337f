/// Comment directives whose whole body is dropped by the tokenizer.
///
/// Knowledge of the delimiters lives here; the tokenizer only asks
/// [`DiscardComment::open`] for the matching end line.
pub struct DiscardComment;

impl DiscardComment {
    pub const IFFALSE: &'static str = "\\iffalse";
    pub const FI: &'static str = "\\fi";
    pub const BEGIN_COMMENT: &'static str = "\\begin{comment}";
    pub const END_COMMENT: &'static str = "\\end{comment}";

    /// Returns the end marker if `line` opens a discarded region.
    pub fn open(line: &str) -> Option<&'static str> {
        let t = line.trim_start();
        if t.starts_with(Self::IFFALSE) {
            Some(Self::FI)
        } else if t.starts_with(Self::BEGIN_COMMENT) {
            Some(Self::END_COMMENT)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iffalse_closes_with_fi() {
        assert_eq!(DiscardComment::open(r"\iffalse"), Some(r"\fi"));
    }

    #[test]
    fn comment_environment_closes_with_end() {
        assert_eq!(
            DiscardComment::open(r"\begin{comment}"),
            Some(r"\end{comment}")
        );
    }

    #[test]
    fn ordinary_line_is_not_a_directive() {
        assert_eq!(DiscardComment::open("if false"), None);
    }
}
