//! # blogify-engine
//!
//! Converts a LaTeX-style paper and its bibliography into one HTML page.
//!
//! ## Modules
//!
//! - **`parsing`**: line tokenizer producing `RawNode`s
//! - **`document`**: `RawNode`s → numbered, labelled `DocumentNode`s
//! - **`inline`**: inline markup → HTML, with citation and footnote registries
//! - **`bibliography`**: `.bib` parsing and loading
//! - **`render`**: page assembly
//! - **`io`**: include flattening, bibliography discovery, output
//! - **`convert`**: the end-to-end pipeline

pub mod bibliography;
pub mod convert;
pub mod document;
pub mod error;
pub mod inline;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use bibliography::{Bibliography, LoaderReport, load_sources};
pub use convert::{Build, build_from_root, convert};
pub use error::ConvertError;
pub use io::{IoError, discover_bibliographies, flatten, write_output};
pub use models::*;
pub use parsing::ParseError;
