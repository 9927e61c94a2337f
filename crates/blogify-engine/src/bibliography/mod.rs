//! # Bibliography
//!
//! Citation key → entry mapping shared by the document builder (inline
//! `thebibliography` entries) and the renderer (References section).
//!
//! - **`entry`**: `BibliographyEntry`, file- or document-sourced
//! - **`bibtex`**: line-based `.bib` parser
//! - **`loader`**: best-effort loading of several sources with a per-source report

pub mod bibtex;
pub mod entry;
pub mod error;
pub mod loader;

use std::collections::HashMap;

use log::debug;

pub use bibtex::parse_bibtex;
pub use entry::{BibliographyEntry, FileEntry, InlineEntry};
pub use error::BibError;
pub use loader::{LoaderReport, SourceReport, load_sources};

/// All known entries, keyed by citation key.
#[derive(Debug, Clone, Default)]
pub struct Bibliography {
    entries: HashMap<String, BibliographyEntry>,
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing and returning any earlier one with its key.
    pub fn insert(&mut self, entry: impl Into<BibliographyEntry>) -> Option<BibliographyEntry> {
        let entry = entry.into();
        let replaced = self.entries.insert(entry.key().to_string(), entry);
        if let Some(old) = &replaced {
            debug!("bibliography entry `{}` replaced", old.key());
        }
        replaced
    }

    pub fn get(&self, key: &str) -> Option<&BibliographyEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
