//! File access: flattening `\input`/`\include` trees, discovering
//! bibliography sources and writing the page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use relative_path::RelativePathBuf;

use crate::parsing::blocks::kinds::CommentMarker;

static INCLUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:input|include)\{([^}]+)\}").unwrap());

static BIBLIOGRAPHY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:bibliography|addbibresource)(?:\[[^\]]*\])?\{([^}]+)\}").unwrap()
});

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Include cycle through {0}")]
    IncludeCycle(PathBuf),
}

/// Read a source file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write the page, creating parent directories if they don't exist
pub fn write_output(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

/// Reads `root` with every `\input{x}` and `\include{x}` replaced by the
/// flattened content of `x`, resolved against the root file's directory.
pub fn flatten(root: &Path) -> Result<String, IoError> {
    let base = root.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut stack = Vec::new();
    flatten_file(root, &base, &mut stack)
}

fn flatten_file(path: &Path, base: &Path, stack: &mut Vec<PathBuf>) -> Result<String, IoError> {
    let content = read_file(path)?;
    let canonical = fs::canonicalize(path)?;
    if stack.contains(&canonical) {
        return Err(IoError::IncludeCycle(path.to_path_buf()));
    }
    stack.push(canonical);

    let mut out = String::with_capacity(content.len());
    for line in content.lines() {
        let code = CommentMarker::strip(line);
        let mut last = 0;
        for caps in INCLUDE_RE.captures_iter(code) {
            let Some(directive) = caps.get(0) else {
                continue;
            };
            out.push_str(&line[last..directive.start()]);
            let target = with_default_extension(&caps[1], "tex").to_path(base);
            let nested = flatten_file(&target, base, stack)?;
            out.push_str(nested.trim_end_matches('\n'));
            last = directive.end();
        }
        out.push_str(&line[last..]);
        out.push('\n');
    }

    stack.pop();
    Ok(out)
}

/// Bibliography sources named by `\bibliography{a,b}` and
/// `\addbibresource{x}`, in order of first mention.
pub fn discover_bibliographies(markup: &str) -> Vec<RelativePathBuf> {
    let mut found = Vec::new();
    for line in markup.lines() {
        for caps in BIBLIOGRAPHY_RE.captures_iter(CommentMarker::strip(line)) {
            for name in caps[1].split(',').map(str::trim).filter(|n| !n.is_empty()) {
                let path = with_default_extension(name, "bib");
                if !found.contains(&path) {
                    found.push(path);
                }
            }
        }
    }
    found
}

fn with_default_extension(name: &str, extension: &str) -> RelativePathBuf {
    let mut path = RelativePathBuf::from(name.trim());
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path
}
