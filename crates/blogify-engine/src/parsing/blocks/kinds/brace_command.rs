use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::source::open_brace_depth;

static COMMAND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\([A-Za-z@]+\*?)").unwrap());

/// A command whose brace argument runs over several lines, e.g.
///
/// ```text
/// \author{
///   Max Kreminski
/// }
/// ```
pub struct BraceCommand;

impl BraceCommand {
    /// The line that closes a brace command block.
    pub const CLOSE: &'static str = "}";

    /// Returns true if the line starts with a command and leaves a brace open.
    pub fn opens(line: &str) -> bool {
        line.starts_with('\\') && open_brace_depth(line) > 0
    }

    /// Extracts the command name, without the leading backslash.
    pub fn name(line: &str) -> Option<&str> {
        COMMAND_NAME_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_command_opens() {
        assert!(BraceCommand::opens(r"\author{"));
        assert!(BraceCommand::opens(r"\newcommand{\foo}{%"));
    }

    #[test]
    fn closed_command_does_not_open() {
        assert!(!BraceCommand::opens(r"\title{Done}"));
        assert!(!BraceCommand::opens(r"text {"));
    }

    #[test]
    fn name_is_extracted() {
        assert_eq!(BraceCommand::name(r"\author{"), Some("author"));
        assert_eq!(BraceCommand::name(r"\section*{Long"), Some("section*"));
    }

    #[test]
    fn name_fails_on_symbol_command() {
        assert_eq!(BraceCommand::name(r"\{ odd {"), None);
    }
}
