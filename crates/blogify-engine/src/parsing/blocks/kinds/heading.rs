use crate::parsing::source::{argument_at, find_command_argument};

/// Single-line structural commands: document title, subtitle and sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingCommand {
    Title,
    Subtitle,
    /// `\section` (1), `\subsection` (2), `\subsubsection` (3).
    Section { depth: u8 },
}

/// A heading line split into its argument and an optional trailing label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    pub command: HeadingCommand,
    pub text: String,
    pub label: Option<String>,
}

impl HeadingCommand {
    const ALL: [HeadingCommand; 5] = [
        HeadingCommand::Title,
        HeadingCommand::Subtitle,
        HeadingCommand::Section { depth: 1 },
        HeadingCommand::Section { depth: 2 },
        HeadingCommand::Section { depth: 3 },
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeadingCommand::Title => "title",
            HeadingCommand::Subtitle => "subtitle",
            HeadingCommand::Section { depth: 1 } => "section",
            HeadingCommand::Section { depth: 2 } => "subsection",
            HeadingCommand::Section { .. } => "subsubsection",
        }
    }

    /// Detects a heading command at the start of `line`.
    ///
    /// The name must be followed by `{`, `*` or `[`, so `\sectionmark` and a
    /// bare `\section` are not headings.
    pub fn detect(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('\\')?;
        Self::ALL.into_iter().find(|cmd| {
            rest.strip_prefix(cmd.name())
                .is_some_and(|after| after.starts_with(['{', '*', '[']))
        })
    }

    /// Extracts the heading argument and a `\label{...}` following it.
    ///
    /// Returns `None` when the argument cannot be extracted.
    pub fn parse(self, line: &str) -> Option<HeadingLine> {
        let arg = argument_at(line, self.name().len() + 1)?;
        let label = find_command_argument(&line[arg.end..], "label")
            .map(|label| label.value.trim().to_string());
        Some(HeadingLine {
            command: self,
            text: arg.value.trim().to_string(),
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r"\title{Paper}", HeadingCommand::Title)]
    #[case(r"\subtitle{More}", HeadingCommand::Subtitle)]
    #[case(r"\section{Intro}", HeadingCommand::Section { depth: 1 })]
    #[case(r"\section*{Intro}", HeadingCommand::Section { depth: 1 })]
    #[case(r"\subsection{Intro}", HeadingCommand::Section { depth: 2 })]
    #[case(r"\subsubsection[s]{Intro}", HeadingCommand::Section { depth: 3 })]
    fn detects_heading_commands(#[case] line: &str, #[case] expected: HeadingCommand) {
        assert_eq!(HeadingCommand::detect(line), Some(expected));
    }

    #[rstest]
    #[case(r"\sectionmark{x}")]
    #[case(r"\section")]
    #[case("section{x}")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(HeadingCommand::detect(line), None);
    }

    #[test]
    fn parse_extracts_trailing_label() {
        let line = r"\section{Related Work}\label{sec:related}";
        let parsed = HeadingCommand::Section { depth: 1 }.parse(line).unwrap();
        assert_eq!(parsed.text, "Related Work");
        assert_eq!(parsed.label.as_deref(), Some("sec:related"));
    }

    #[test]
    fn parse_keeps_nested_braces() {
        let line = r"\title{The \emph{Big} Idea}";
        let parsed = HeadingCommand::Title.parse(line).unwrap();
        assert_eq!(parsed.text, r"The \emph{Big} Idea");
        assert_eq!(parsed.label, None);
    }

    #[test]
    fn parse_fails_on_unterminated_option() {
        let line = r"\section[short";
        assert_eq!(HeadingCommand::Section { depth: 1 }.parse(line), None);
    }
}
