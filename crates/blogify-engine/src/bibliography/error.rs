use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BibError {
    #[error("Cannot read bibliography {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed bibliography record on line {line}: {text}")]
    Malformed { line: usize, text: String },
}
