use std::fmt;

use super::kinds::Environment;

/// What a multi-line block was opened by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A recognised `\begin{...}` environment.
    Environment {
        env: Environment,
        /// Opened as `\begin{name*}`.
        starred: bool,
    },
    /// A command whose brace argument stays open past its line.
    Command {
        /// Command name without the backslash.
        name: String,
    },
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Environment { env, starred } => {
                write!(f, "{}{}", env.name(), if *starred { "*" } else { "" })
            }
            BlockKind::Command { name } => write!(f, "\\{name}"),
        }
    }
}

/// One node of the tokenized document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    /// A blank line.
    Empty,
    /// Paragraph text with any trailing comment removed.
    Text(String),
    Title(String),
    Subtitle(String),
    /// `\section` (1), `\subsection` (2) or `\subsubsection` (3).
    SectionHeader {
        depth: u8,
        text: String,
        /// A `\label{...}` written on the same line.
        label: Option<String>,
    },
    /// A block captured verbatim up to its end marker.
    ///
    /// Environment blocks hold only their body lines; brace-command blocks
    /// also hold the opening line.
    MultilineBlock { kind: BlockKind, lines: Vec<String> },
    /// An opaque command line, trimmed.
    OneLineCommand(String),
}
