pub mod blocks;
pub mod error;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use blocks::{RawNode, RawNodeBuilder};
use source::lines_with_numbers;

#[derive(Debug)]
pub struct ParsedDoc {
    pub nodes: Vec<RawNode>,
}

/// Tokenizes flattened markup into raw nodes in source order.
pub fn parse_document(markup: &str) -> Result<ParsedDoc, ParseError> {
    let mut builder = RawNodeBuilder::new();

    for lr in lines_with_numbers(markup) {
        builder.push(lr)?;
    }

    Ok(ParsedDoc {
        nodes: builder.finish(),
    })
}
