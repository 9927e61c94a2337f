//! # Document Building
//!
//! Turns the tokenizer's [`RawNode`](crate::parsing::blocks::RawNode)s into
//! semantic [`DocumentNode`]s.
//!
//! - **`types`**: `Document`, `DocumentNode`, `Figure`, `Table`, `LabelIndex`
//! - **`builder`**: `DocumentBuilder`, the paragraph accumulator
//! - **`kinds`**: sub-parsers for environment bodies (lists, figures, tables,
//!   inline bibliography)
//! - **`anchor`**: heading slugs

pub mod anchor;
pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::{DocumentBuilder, build_document};
pub use types::{CrossRef, Document, DocumentNode, Figure, LabelIndex, Table};
