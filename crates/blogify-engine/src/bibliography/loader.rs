use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};

use super::{BibError, Bibliography, FileEntry, parse_bibtex};

/// Outcome of loading one bibliography source.
#[derive(Debug)]
pub struct SourceReport {
    pub path: PathBuf,
    /// Number of entries loaded, or why the source was skipped.
    pub outcome: Result<usize, BibError>,
}

/// Per-source results of [`load_sources`].
#[derive(Debug, Default)]
pub struct LoaderReport {
    pub sources: Vec<SourceReport>,
}

impl LoaderReport {
    /// Sources that could not be loaded.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &BibError)> {
        self.sources.iter().filter_map(|s| match &s.outcome {
            Ok(_) => None,
            Err(e) => Some((s.path.as_path(), e)),
        })
    }

    /// Total entries loaded across all sources.
    pub fn loaded(&self) -> usize {
        self.sources
            .iter()
            .filter_map(|s| s.outcome.as_ref().ok())
            .sum()
    }
}

/// Reads and parses one `.bib` file.
pub fn load_source(path: &Path) -> Result<Vec<FileEntry>, BibError> {
    let text = fs::read_to_string(path).map_err(|source| BibError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bibtex(&text)
}

/// Loads every source into one bibliography.
///
/// A source that cannot be read or parsed is skipped and its error recorded;
/// the rest still load. Later sources override earlier ones key by key.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> (Bibliography, LoaderReport) {
    let mut bibliography = Bibliography::new();
    let mut report = LoaderReport::default();

    for path in paths {
        let path = path.as_ref();
        let outcome = load_source(path).map(|entries| {
            let count = entries.len();
            for entry in entries {
                bibliography.insert(entry);
            }
            count
        });
        match &outcome {
            Ok(count) => info!("loaded {count} bibliography entries from {}", path.display()),
            Err(e) => warn!("skipping bibliography source: {e}"),
        }
        report.sources.push(SourceReport {
            path: path.to_path_buf(),
            outcome,
        });
    }

    (bibliography, report)
}
