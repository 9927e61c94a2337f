use crate::parsing::{ParseError, source::LineRef};

use super::kinds::{BraceCommand, DiscardComment, Environment, SpanCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    Environment { env: Environment, starred: bool },
    Command { name: String },
    /// Everything up to `end` is dropped.
    Discard { end: &'static str },
}

impl BlockOpen {
    /// The trimmed line that closes this block.
    pub fn end_marker(&self) -> String {
        match self {
            BlockOpen::Environment { env, starred } => env.end_marker(*starred),
            BlockOpen::Command { .. } => BraceCommand::CLOSE.to_string(),
            BlockOpen::Discard { end } => (*end).to_string(),
        }
    }
}

/// Detects a line that opens a multi-line block.
///
/// A line that looks like an unclosed brace command but has no readable
/// command name is a [`ParseError::MalformedCommand`].
pub fn try_open_block(lr: &LineRef<'_>) -> Result<Option<BlockOpen>, ParseError> {
    let line = lr.text.trim_start();

    // Precedence: discard directives, then environments, then brace commands.
    if let Some(end) = DiscardComment::open(line) {
        return Ok(Some(BlockOpen::Discard { end }));
    }
    if let Some((env, starred)) = Environment::open(line) {
        return Ok(Some(BlockOpen::Environment { env, starred }));
    }
    if BraceCommand::opens(line) && !SpanCommand::starts(line) {
        let name = BraceCommand::name(line).ok_or_else(|| ParseError::MalformedCommand {
            line: lr.number,
            text: lr.text.to_string(),
        })?;
        return Ok(Some(BlockOpen::Command {
            name: name.to_string(),
        }));
    }
    Ok(None)
}
