pub mod args;
pub mod lines;

pub use args::{Argument, argument_at, find_command_argument, group_end, open_brace_depth};
pub use lines::{LineRef, lines_with_numbers};
