use crate::parsing::{ParseError, source::LineRef};

use super::{
    kinds::{CommentMarker, HeadingCommand, HeadingLine, SpanCommand},
    open::{BlockOpen, try_open_block},
};

/// What a line means when no block is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// A comment and nothing else.
    CommentOnly,
    Open(BlockOpen),
    Heading(HeadingLine),
    /// A line starting with a command that is not an inline span.
    Command,
    /// Text before the first unescaped comment marker.
    Text(String),
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub line: LineRef<'a>,
    pub kind: LineKind,
}

/// Classifies individual lines for the tokenizer.
pub struct LatexLineClassifier;

impl LatexLineClassifier {
    /// Classifies a line read while no block is open.
    ///
    /// Fails when a heading command's argument cannot be extracted or an
    /// unclosed brace command has no readable name.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> Result<LineClass<'a>, ParseError> {
        let kind = Self::kind(lr)?;
        Ok(LineClass { line: *lr, kind })
    }

    fn kind(lr: &LineRef<'_>) -> Result<LineKind, ParseError> {
        if lr.is_blank() {
            return Ok(LineKind::Blank);
        }
        if CommentMarker::is_comment_only(lr.text) {
            return Ok(LineKind::CommentOnly);
        }
        if let Some(open) = try_open_block(lr)? {
            return Ok(LineKind::Open(open));
        }

        let line = lr.text.trim_start();
        if let Some(command) = HeadingCommand::detect(line) {
            let heading = command
                .parse(line)
                .ok_or_else(|| ParseError::MissingArgument {
                    line: lr.number,
                    command: command.name(),
                    text: lr.text.to_string(),
                })?;
            return Ok(LineKind::Heading(heading));
        }
        if line.starts_with('\\') && !SpanCommand::starts(line) {
            return Ok(LineKind::Command);
        }
        Ok(LineKind::Text(CommentMarker::strip(lr.text).to_string()))
    }
}
