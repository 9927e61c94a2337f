use thiserror::Error;

/// A line that should match a structural pattern but does not.
///
/// The tokenizer assumes well-formed markup, so these are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: cannot read a command name from `{text}`")]
    MalformedCommand { line: usize, text: String },
    #[error("line {line}: missing argument for \\{command} in `{text}`")]
    MissingArgument {
        line: usize,
        command: &'static str,
        text: String,
    },
}

impl ParseError {
    /// 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedCommand { line, .. } | ParseError::MissingArgument { line, .. } => {
                *line
            }
        }
    }
}
