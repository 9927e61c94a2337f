use log::{debug, warn};

use crate::parsing::{ParseError, source::LineRef};

use super::{
    classify::{LatexLineClassifier, LineKind},
    kinds::HeadingCommand,
    open::BlockOpen,
    types::{BlockKind, RawNode},
};

#[derive(Debug)]
enum State {
    Idle,
    InBlock {
        kind: BlockKind,
        lines: Vec<String>,
        end: String,
        opened_at: usize,
    },
    Discarding {
        end: &'static str,
        opened_at: usize,
    },
}

/// Tokenizer state machine: turns lines into [`RawNode`]s.
///
/// While a block is open its lines are never classified, so nested
/// delimiters and malformed commands inside it are plain content.
pub struct RawNodeBuilder {
    classifier: LatexLineClassifier,
    state: State,
    out: Vec<RawNode>,
}

impl RawNodeBuilder {
    pub fn new() -> Self {
        Self {
            classifier: LatexLineClassifier,
            state: State::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, lr: LineRef<'_>) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::InBlock {
                kind,
                mut lines,
                end,
                opened_at,
            } => {
                if lr.text.trim() == end {
                    self.out.push(RawNode::MultilineBlock { kind, lines });
                } else {
                    lines.push(lr.text.to_string());
                    self.state = State::InBlock {
                        kind,
                        lines,
                        end,
                        opened_at,
                    };
                }
                return Ok(());
            }
            State::Discarding { end, opened_at } => {
                if lr.text.trim() != end {
                    self.state = State::Discarding { end, opened_at };
                }
                return Ok(());
            }
        }

        let class = self.classifier.classify(&lr)?;
        match class.kind {
            LineKind::Blank => self.out.push(RawNode::Empty),
            LineKind::CommentOnly => {}
            LineKind::Open(open) => self.open_block(open, lr),
            LineKind::Heading(heading) => self.out.push(match heading.command {
                HeadingCommand::Title => RawNode::Title(heading.text),
                HeadingCommand::Subtitle => RawNode::Subtitle(heading.text),
                HeadingCommand::Section { depth } => RawNode::SectionHeader {
                    depth,
                    text: heading.text,
                    label: heading.label,
                },
            }),
            LineKind::Command => self
                .out
                .push(RawNode::OneLineCommand(lr.text.trim().to_string())),
            LineKind::Text(text) => self.out.push(RawNode::Text(text)),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Vec<RawNode> {
        // EOF flush
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::InBlock {
                kind,
                lines,
                end,
                opened_at,
            } => {
                warn!("{kind} opened at line {opened_at} is never closed by `{end}`");
                self.out.push(RawNode::MultilineBlock { kind, lines });
            }
            State::Discarding { end, opened_at } => {
                warn!("comment opened at line {opened_at} is never closed by `{end}`");
            }
        }
        self.out
    }

    fn open_block(&mut self, open: BlockOpen, lr: LineRef<'_>) {
        let end = open.end_marker();
        match open {
            BlockOpen::Discard { end } => {
                debug!("discarding comment from line {}", lr.number);
                self.state = State::Discarding {
                    end,
                    opened_at: lr.number,
                };
            }
            BlockOpen::Environment { env, starred } => {
                let kind = BlockKind::Environment { env, starred };
                // `\begin{x} body \end{x}` on one line closes immediately.
                if let Some(body) = one_line_body(lr.text, &end) {
                    let lines = if body.is_empty() {
                        vec![]
                    } else {
                        vec![body.to_string()]
                    };
                    self.out.push(RawNode::MultilineBlock { kind, lines });
                    return;
                }
                self.state = State::InBlock {
                    kind,
                    lines: vec![],
                    end,
                    opened_at: lr.number,
                };
            }
            BlockOpen::Command { name } => {
                self.state = State::InBlock {
                    kind: BlockKind::Command { name },
                    lines: vec![lr.text.to_string()],
                    end,
                    opened_at: lr.number,
                };
            }
        }
    }
}

impl Default for RawNodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text between the opening `\begin{...}` group and `end` on the same line.
fn one_line_body<'a>(line: &'a str, end: &str) -> Option<&'a str> {
    let close = line.find(end)?;
    let open_end = line.find('}')? + 1;
    (open_end <= close).then(|| line[open_end..close].trim())
}
