pub mod brace_command;
pub mod comment;
pub mod discard;
pub mod environment;
pub mod heading;
pub mod span_command;

pub use brace_command::BraceCommand;
pub use comment::CommentMarker;
pub use discard::DiscardComment;
pub use environment::Environment;
pub use heading::{HeadingCommand, HeadingLine};
pub use span_command::SpanCommand;
