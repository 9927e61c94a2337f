use crate::{
    document::types::Figure,
    parsing::{blocks::kinds::CommentMarker, source::find_command_argument},
};

/// Caption, image and label of a `figure` body.
pub struct FigureBody;

impl FigureBody {
    pub const CAPTION: &'static str = "caption";
    pub const GRAPHICS: &'static str = "includegraphics";
    pub const LABEL: &'static str = "label";

    /// Reads the marker commands anywhere in the body; any may be missing.
    pub fn parse(lines: &[String], number: usize) -> Figure {
        let body = strip_comments(lines);
        let find = |name| find_command_argument(&body, name).map(|arg| arg.value.trim().to_string());
        Figure {
            number,
            caption: find(Self::CAPTION),
            graphics: find(Self::GRAPHICS),
            label: find(Self::LABEL),
        }
    }
}

/// Joins body lines with their comments removed.
pub(crate) fn strip_comments(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| CommentMarker::strip(line))
        .collect::<Vec<_>>()
        .join("\n")
}
