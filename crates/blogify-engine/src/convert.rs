//! End-to-end pipeline: tokenizer → document builder → renderer.

use std::path::Path;

use log::info;

use crate::bibliography::{Bibliography, LoaderReport, load_sources};
use crate::document::build_document;
use crate::error::ConvertError;
use crate::io::{discover_bibliographies, flatten};
use crate::models::Publication;
use crate::parsing::parse_document;
use crate::render::Renderer;

/// A rendered page and how its bibliography sources fared.
#[derive(Debug)]
pub struct Build {
    pub html: String,
    pub report: LoaderReport,
}

/// Converts flattened markup into a complete HTML page.
///
/// Inline `thebibliography` entries are added to `bibliography`, replacing
/// file entries with the same key.
pub fn convert(
    markup: &str,
    bibliography: &mut Bibliography,
    publication: &Publication,
) -> Result<String, ConvertError> {
    let parsed = parse_document(markup)?;
    info!("tokenized {} raw nodes", parsed.nodes.len());

    let document = build_document(parsed.nodes, bibliography);
    info!(
        "built {} nodes, {} labels",
        document.nodes.len(),
        document.labels.len()
    );

    Ok(Renderer::new(&document, bibliography, publication).render_page())
}

/// Flattens the root file, loads the bibliographies it names and converts.
///
/// Bibliography paths resolve against the root file's directory. A source
/// that fails to load is recorded in the report and skipped.
pub fn build_from_root(root: &Path, publication: &Publication) -> Result<Build, ConvertError> {
    let markup = flatten(root)?;
    let base = root.parent().unwrap_or(Path::new(""));
    let sources: Vec<_> = discover_bibliographies(&markup)
        .iter()
        .map(|path| path.to_path(base))
        .collect();
    info!("{} bibliography sources named", sources.len());

    let (mut bibliography, report) = load_sources(&sources);
    let html = convert(&markup, &mut bibliography, publication)?;
    Ok(Build { html, report })
}
